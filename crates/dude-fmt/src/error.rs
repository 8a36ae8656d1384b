use std::fmt;

/// Which of the two node unions a failing node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Expression,
    Statement,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression => write!(f, "expression"),
            Self::Statement => write!(f, "statement"),
        }
    }
}

/// An error raised while formatting a tree.
///
/// Formatting is all-or-nothing: when this is returned, no text was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The printer met a node outside the closed variant set, which means the
    /// tree's producer is out of sync with `dude-ast`.
    UnsupportedNodeVariant {
        node: NodeKind,
        /// The node's `"kind"` tag as the producer wrote it.
        variant: String,
        /// Index of the enclosing top-level statement, when known.
        statement: Option<usize>,
    },
}

impl FormatError {
    pub fn unsupported(node: NodeKind, variant: impl Into<String>) -> Self {
        Self::UnsupportedNodeVariant {
            node,
            variant: variant.into(),
            statement: None,
        }
    }

    /// Attach the index of the top-level statement the error came from.
    pub fn at_statement(self, index: usize) -> Self {
        match self {
            Self::UnsupportedNodeVariant { node, variant, .. } => Self::UnsupportedNodeVariant {
                node,
                variant,
                statement: Some(index),
            },
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedNodeVariant {
                node,
                variant,
                statement: Some(index),
            } => write!(
                f,
                "unsupported {node} variant `{variant}` in top-level statement {index}"
            ),
            Self::UnsupportedNodeVariant {
                node,
                variant,
                statement: None,
            } => write!(f, "unsupported {node} variant `{variant}`"),
        }
    }
}

impl std::error::Error for FormatError {}
