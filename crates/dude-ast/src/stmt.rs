//! Statements and block structure.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Expression, Identifier};

/// A single statement. Block statements own their bodies.
///
/// (De)serialization is split the same way as for [`Expression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "kind")]
pub enum Statement {
    Empty,
    Assignment {
        target: Identifier,
        value: Expression,
    },
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Expression>,
    },
    /// Record definition: `dat Name ... end`.
    Structure {
        name: Identifier,
        members: Vec<Expression>,
    },
    While {
        condition: Expression,
        body: Vec<Statement>,
    },
    For {
        index: Identifier,
        iterable: Expression,
        body: Vec<Statement>,
    },
    Function {
        name: Identifier,
        params: Vec<Expression>,
        body: Vec<Statement>,
    },
    /// `if` with at most one `elif` and at most one `else`.
    Conditional {
        if_branch: Branch,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        elif_branch: Option<Branch>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_body: Option<Vec<Statement>>,
    },
    /// A node whose tag is outside the set above.
    #[serde(skip)]
    Unknown { kind: String },
}

impl Statement {
    /// Every tag the derived decoder understands.
    pub const KINDS: &'static [&'static str] = &[
        "Empty",
        "Assignment",
        "Return",
        "Structure",
        "While",
        "For",
        "Function",
        "Conditional",
    ];

    pub fn is_assignment(&self) -> bool {
        matches!(self, Self::Assignment { .. })
    }

    /// The variant name, as written in the `"kind"` tag.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Assignment { .. } => "Assignment",
            Self::Return { .. } => "Return",
            Self::Structure { .. } => "Structure",
            Self::While { .. } => "While",
            Self::For { .. } => "For",
            Self::Function { .. } => "Function",
            Self::Conditional { .. } => "Conditional",
            Self::Unknown { kind } => kind.as_str(),
        }
    }
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown { kind } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("kind", kind)?;
                map.end()
            }
            _ => Statement::serialize(self, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = serde_json::Value::deserialize(deserializer)?;
        match crate::unknown_kind(&node, Self::KINDS) {
            Some(kind) => Ok(Self::Unknown { kind }),
            None => Statement::deserialize(node).map_err(D::Error::custom),
        }
    }
}

/// A guarded body: the `if` or `elif` arm of a conditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::*;

    #[test]
    fn kind_name_matches_serialized_tag() {
        for stmt in [
            Statement::Empty,
            assign("x", null()),
            ret(None),
            structure("P", vec![]),
            while_loop(null(), vec![]),
            for_loop("i", null(), vec![]),
            func("f", vec![], vec![]),
            if_then(null(), vec![]),
            unknown_stmt("Goto"),
        ] {
            let json = serde_json::to_value(&stmt).unwrap();
            assert_eq!(json["kind"], stmt.kind_name());
        }
    }
}
