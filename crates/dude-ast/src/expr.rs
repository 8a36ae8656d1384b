//! Value expressions.

use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Identifier;

/// A value expression.
///
/// The derive below generates inherent `Expression::serialize` and
/// `Expression::deserialize`; the trait impls at the bottom of this file wrap
/// them to route unknown tags to [`Expression::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "kind")]
pub enum Expression {
    /// Placeholder for an absent expression; renders as nothing.
    Empty,
    Null,
    Number {
        value: Number,
    },
    Identifier(Identifier),
    Boolean {
        value: bool,
    },
    /// String literal. `value` already carries its delimiters.
    String {
        value: String,
    },
    Character {
        value: char,
    },
    /// An operator token such as `+` or `==`, used as the middle of a
    /// [`Expression::Condition`].
    Operator {
        token: String,
    },
    List {
        elements: Vec<Expression>,
    },
    /// Slice-like range `[start:stop:step]`.
    Sequence {
        start: Box<Expression>,
        stop: Box<Expression>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<Box<Expression>>,
    },
    /// Binary form `left operator right`.
    Condition {
        left: Box<Expression>,
        operator: Box<Expression>,
        right: Box<Expression>,
    },
    /// Parenthesized grouping.
    Nested {
        inner: Box<Expression>,
    },
    /// A node whose tag is outside the set above.
    #[serde(skip)]
    Unknown { kind: String },
}

impl Expression {
    /// Every tag the derived decoder understands.
    pub const KINDS: &'static [&'static str] = &[
        "Empty",
        "Null",
        "Number",
        "Identifier",
        "Boolean",
        "String",
        "Character",
        "Operator",
        "List",
        "Sequence",
        "Condition",
        "Nested",
    ];

    /// The variant name, as written in the `"kind"` tag.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Null => "Null",
            Self::Number { .. } => "Number",
            Self::Identifier(_) => "Identifier",
            Self::Boolean { .. } => "Boolean",
            Self::String { .. } => "String",
            Self::Character { .. } => "Character",
            Self::Operator { .. } => "Operator",
            Self::List { .. } => "List",
            Self::Sequence { .. } => "Sequence",
            Self::Condition { .. } => "Condition",
            Self::Nested { .. } => "Nested",
            Self::Unknown { kind } => kind.as_str(),
        }
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown { kind } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("kind", kind)?;
                map.end()
            }
            _ => Expression::serialize(self, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = serde_json::Value::deserialize(deserializer)?;
        match crate::unknown_kind(&node, Self::KINDS) {
            Some(kind) => Ok(Self::Unknown { kind }),
            None => Expression::deserialize(node).map_err(D::Error::custom),
        }
    }
}

/// A numeric literal.
///
/// Integers and floats are kept apart so that `3` and `3.0` print back the way
/// they were written. `UInt` only holds values above `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            // Plain decimal digits, never an exponent; integral values keep `.0`.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x}.0"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::UInt(n), Self::Int)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}
