//! Expression printing.
//!
//! Expressions never open a block, so this side of the printer needs no
//! indentation state: every expression renders to a single line fragment.

use dude_ast::Expression;

use crate::error::{FormatError, NodeKind};

/// Render an expression to its canonical text.
pub fn format_expression(expr: &Expression) -> Result<String, FormatError> {
    let text = match expr {
        Expression::Empty => String::new(),
        Expression::Null => "null".to_string(),
        Expression::Number { value } => value.to_string(),
        Expression::Identifier(id) => id.as_str().to_string(),
        Expression::Boolean { value: true } => "True".to_string(),
        Expression::Boolean { value: false } => "False".to_string(),
        Expression::String { value } => value.clone(),
        Expression::Character { value } => value.to_string(),
        Expression::Operator { token } => token.clone(),
        Expression::List { elements } => format!("[{}]", join(elements)?),
        Expression::Sequence { start, stop, step } => {
            let start = format_expression(start)?;
            let stop = format_expression(stop)?;
            match step {
                Some(step) => format!("[{start}:{stop}:{}]", format_expression(step)?),
                None => format!("[{start}:{stop}]"),
            }
        }
        Expression::Condition {
            left,
            operator,
            right,
        } => format!(
            "{} {} {}",
            format_expression(left)?,
            format_expression(operator)?,
            format_expression(right)?
        ),
        Expression::Nested { inner } => format!("({})", format_expression(inner)?),
        Expression::Unknown { .. } => {
            return Err(FormatError::unsupported(NodeKind::Expression, expr.kind_name()))
        }
    };
    Ok(text)
}

/// Render a sequence of expressions separated by `,`.
pub(crate) fn join(exprs: &[Expression]) -> Result<String, FormatError> {
    let parts = exprs
        .iter()
        .map(format_expression)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(","))
}
