//! Syntax tree for the Dude language.
//!
//! The tree is a plain owned data structure: a [`Program`] is an ordered list of
//! [`Statement`]s, and statements embed [`Expression`]s. Both unions are closed;
//! the only open door is the `Unknown` variant, which a deserialized tree lands
//! on when its producer wrote a node tag this crate does not know. The tag is
//! kept so consumers can name it when they reject the node.
//!
//! # Serialized form
//!
//! Nodes serialize as internally tagged JSON objects keyed by `"kind"`:
//!
//! ```
//! let program = dude_ast::from_json(
//!     r#"{"statements":[{"kind":"Assignment","target":{"name":"x"},"value":{"kind":"Number","value":1}}]}"#,
//! )
//! .unwrap();
//! assert!(program.statements[0].is_assignment());
//! ```

pub mod build;
pub mod error;
pub mod expr;
pub mod stmt;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::LoadError;
pub use expr::{Expression, Number};
pub use stmt::{Branch, Statement};

/// The root of a Dude syntax tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Serialize the program as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A bare name: variables, functions, structures, loop indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// The `"kind"` tag of a buffered node, if it is a string outside `known`.
///
/// Nodes with a known tag, or with no usable tag at all, go through the derived
/// decoder so that shape errors (missing fields and the like) are reported.
pub(crate) fn unknown_kind(node: &serde_json::Value, known: &[&str]) -> Option<String> {
    let kind = node.get("kind")?.as_str()?;
    (!known.contains(&kind)).then(|| kind.to_string())
}

/// Decode a program from its JSON form.
pub fn from_json(source: &str) -> Result<Program, LoadError> {
    serde_json::from_str(source).map_err(LoadError::Decode)
}

/// Read and decode a JSON-serialized program from disk.
pub fn load(path: &Path) -> Result<Program, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&source)
}

#[cfg(test)]
mod tests {
    use super::build::*;
    use super::*;

    #[test]
    fn json_round_trip_preserves_tree() {
        let program = Program::new(vec![
            assign("x", num(1)),
            func(
                "f",
                vec![expr_ident("a")],
                vec![ret(Some(cond(expr_ident("a"), op("+"), num(2.5))))],
            ),
            if_else(
                cond(expr_ident("x"), op("=="), num(1)),
                vec![ret(None)],
                Some(branch(boolean(false), vec![])),
                Some(vec![assign("y", string("\"hi\""))]),
            ),
        ]);
        let json = program.to_json_pretty().unwrap();
        assert_eq!(from_json(&json).unwrap(), program);
    }

    #[test]
    fn unknown_kind_decodes_to_unknown_variant() {
        let program = from_json(
            r#"{"statements":[
                {"kind":"Goto","label":"top"},
                {"kind":"Assignment","target":{"name":"x"},"value":{"kind":"Lambda"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(program.statements[0], unknown_stmt("Goto"));
        assert_eq!(program.statements[1], assign("x", unknown_expr("Lambda")));
    }

    #[test]
    fn unknown_nodes_serialize_back_to_their_tag() {
        let program = Program::new(vec![
            unknown_stmt("Goto"),
            while_loop(unknown_expr("Lambda"), vec![]),
        ]);
        let json: serde_json::Value =
            serde_json::from_str(&program.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["statements"][0], serde_json::json!({"kind": "Goto"}));
        assert_eq!(json["statements"][1]["condition"]["kind"], "Lambda");
        assert_eq!(from_json(&json.to_string()).unwrap(), program);
    }

    #[test]
    fn known_kind_with_bad_shape_is_not_unknown() {
        let err = from_json(
            r#"{"statements":[{"kind":"While","condition":{"kind":"Null"}}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("body"), "got: {err}");
    }

    #[test]
    fn sequence_without_stop_is_a_decode_error() {
        let err = from_json(
            r#"{"statements":[{"kind":"Assignment","target":{"name":"s"},
                "value":{"kind":"Sequence","start":{"kind":"Number","value":0}}}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert!(err.to_string().contains("stop"), "got: {err}");
    }

    #[test]
    fn numbers_keep_integer_and_float_forms() {
        let program = from_json(
            r#"{"statements":[
                {"kind":"Assignment","target":{"name":"a"},"value":{"kind":"Number","value":3}},
                {"kind":"Assignment","target":{"name":"b"},"value":{"kind":"Number","value":3.0}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(program.statements[0], assign("a", num(3)));
        assert_eq!(program.statements[1], assign("b", num(3.0)));
    }

    #[test]
    fn integers_beyond_i64_stay_exact() {
        let program = from_json(
            r#"{"statements":[
                {"kind":"Assignment","target":{"name":"big"},"value":{"kind":"Number","value":18446744073709551615}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(program.statements[0], assign("big", num(u64::MAX)));
        let json = program.to_json_pretty().unwrap();
        assert!(json.contains("18446744073709551615"), "got: {json}");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prog.json");
        let program = Program::new(vec![assign("x", null())]);
        std::fs::write(&path, program.to_json_pretty().unwrap()).unwrap();
        assert_eq!(load(&path).unwrap(), program);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
