//! Statement printing.
//!
//! Every line a statement emits ends in `\n` and starts with the prefix for the
//! statement's own level. Block bodies are printed inside
//! [`IndentContext::enter`], which puts them exactly one level deeper than the
//! header and the closing `end`.

use dude_ast::{Branch, Statement};

use crate::context::IndentContext;
use crate::error::{FormatError, NodeKind};
use crate::expr::{format_expression, join};

/// Render a statement, including any nested blocks, at the context's level.
pub fn format_statement(stmt: &Statement, ctx: &mut IndentContext) -> Result<String, FormatError> {
    let prefix = ctx.prefix();
    let mut out = String::new();

    match stmt {
        Statement::Empty => {}

        Statement::Assignment { target, value } => {
            let value = format_expression(value)?;
            push_line(&mut out, &prefix, &spaced(&format!("{} =", target.as_str()), &value));
        }

        Statement::Return { value: None } => push_line(&mut out, &prefix, "ret"),
        Statement::Return { value: Some(value) } => {
            let value = format_expression(value)?;
            push_line(&mut out, &prefix, &spaced("ret", &value));
        }

        Statement::Structure { name, members } => {
            push_line(&mut out, &prefix, &spaced("dat", name.as_str()));
            if !members.is_empty() {
                let inner = ctx.enter();
                push_line(&mut out, &inner.prefix(), &join(members)?);
            }
            push_line(&mut out, &prefix, "end");
        }

        Statement::While { condition, body } => {
            let condition = format_expression(condition)?;
            push_line(&mut out, &prefix, &spaced("while", &condition));
            out.push_str(&format_body(body, ctx)?);
            push_line(&mut out, &prefix, "end");
        }

        Statement::For {
            index,
            iterable,
            body,
        } => {
            let iterable = format_expression(iterable)?;
            let header = format!("for {} in", index.as_str());
            push_line(&mut out, &prefix, &spaced(&header, &iterable));
            out.push_str(&format_body(body, ctx)?);
            push_line(&mut out, &prefix, "end");
        }

        Statement::Function { name, params, body } => {
            let params = join(params)?;
            push_line(&mut out, &prefix, &format!("fun {}({params})", name.as_str()));
            out.push_str(&format_body(body, ctx)?);
            push_line(&mut out, &prefix, "end");
        }

        Statement::Conditional {
            if_branch,
            elif_branch,
            else_body,
        } => {
            format_branch(&mut out, "if", if_branch, ctx, &prefix)?;
            if let Some(elif) = elif_branch {
                format_branch(&mut out, "elif", elif, ctx, &prefix)?;
            }
            if let Some(body) = else_body {
                push_line(&mut out, &prefix, "else");
                out.push_str(&format_body(body, ctx)?);
            }
            push_line(&mut out, &prefix, "end");
        }

        Statement::Unknown { .. } => {
            return Err(FormatError::unsupported(NodeKind::Statement, stmt.kind_name()))
        }
    }

    Ok(out)
}

/// Render a statement sequence at the context's current level, with no blank
/// lines between statements.
pub fn format_block(body: &[Statement], ctx: &mut IndentContext) -> Result<String, FormatError> {
    let mut out = String::new();
    for stmt in body {
        out.push_str(&format_statement(stmt, ctx)?);
    }
    Ok(out)
}

/// Render a block body one level deeper than the current one.
fn format_body(body: &[Statement], ctx: &mut IndentContext) -> Result<String, FormatError> {
    let mut inner = ctx.enter();
    format_block(body, &mut inner)
}

fn format_branch(
    out: &mut String,
    keyword: &str,
    branch: &Branch,
    ctx: &mut IndentContext,
    prefix: &str,
) -> Result<(), FormatError> {
    let condition = format_expression(&branch.condition)?;
    push_line(out, prefix, &spaced(keyword, &condition));
    out.push_str(&format_body(&branch.body, ctx)?);
    Ok(())
}

/// `head tail`, or just `head` when the tail rendered empty.
fn spaced(head: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.to_string()
    } else {
        format!("{head} {tail}")
    }
}

fn push_line(out: &mut String, prefix: &str, line: &str) {
    out.push_str(prefix);
    out.push_str(line);
    out.push('\n');
}
