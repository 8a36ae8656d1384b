//! Dude code formatter.
//!
//! This crate renders a [`dude_ast::Program`] as canonical source text. It
//! works directly on the typed tree:
//!
//! 1. Each top-level statement is printed by [`stmt::format_statement`], which
//!    recurses into block bodies and hands embedded values to
//!    [`expr::format_expression`].
//! 2. Nesting depth lives in an [`IndentContext`] that is bumped for every
//!    block body and restored on the way out.
//! 3. [`format_program`] joins the statements, putting one blank line wherever
//!    the output switches between assignments and everything else.
//!
//! Output is deterministic: the same tree always prints to the same bytes.

pub mod context;
pub mod error;
pub mod expr;
pub mod stmt;

use dude_ast::{Program, Statement};

pub use context::{IndentContext, IndentGuard};
pub use error::{FormatError, NodeKind};
pub use expr::format_expression;
pub use stmt::{format_block, format_statement};

/// Configuration for the formatter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level. Default: 2.
    pub indent_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_size: 2 }
    }
}

impl FormatConfig {
    /// The string that makes up one level of indentation.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_size)
    }
}

/// Format a program according to the given configuration.
///
/// A blank line is written before a top-level statement whenever its
/// assignment/non-assignment classification differs from the previous
/// statement's. The program starts out in the non-assignment state, so a
/// leading non-assignment is preceded by a blank line and a leading assignment
/// is not. Statements of the same class stay on adjacent lines, whichever
/// class that is. `Empty` statements print nothing and are skipped for spacing
/// purposes.
///
/// # Example
///
/// ```
/// use dude_ast::build::*;
/// use dude_ast::Program;
/// use dude_fmt::{format_program, FormatConfig};
///
/// let program = Program::new(vec![
///     assign("x", num(1)),
///     func("f", vec![], vec![ret(Some(expr_ident("x")))]),
/// ]);
/// let formatted = format_program(&program, &FormatConfig::default()).unwrap();
/// assert_eq!(formatted, "x = 1\n\nfun f()\n  ret x\nend\n");
/// ```
pub fn format_program(program: &Program, config: &FormatConfig) -> Result<String, FormatError> {
    let mut ctx = IndentContext::from_config(config);
    let mut out = String::new();
    // Before the first statement nothing has been printed yet; only a leading
    // non-assignment gets a blank line in that state.
    let mut prev_was_assignment: Option<bool> = None;

    for (index, stmt) in program.statements.iter().enumerate() {
        if matches!(stmt, Statement::Empty) {
            continue;
        }
        let is_assignment = stmt.is_assignment();
        let blank_line = match prev_was_assignment {
            None => !is_assignment,
            Some(prev) => prev != is_assignment,
        };
        if blank_line {
            out.push('\n');
        }
        let text = format_statement(stmt, &mut ctx).map_err(|e| e.at_statement(index))?;
        out.push_str(&text);
        prev_was_assignment = Some(is_assignment);
    }

    Ok(out)
}

/// Format a program with [`FormatConfig::default`].
pub fn format_program_default(program: &Program) -> Result<String, FormatError> {
    format_program(program, &FormatConfig::default())
}
