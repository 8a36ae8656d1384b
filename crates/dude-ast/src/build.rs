//! Shorthand constructors for building trees in code.
//!
//! ```
//! use dude_ast::build::*;
//!
//! let stmt = assign("total", cond(expr_ident("a"), op("+"), num(1)));
//! assert!(stmt.is_assignment());
//! ```

use crate::{Branch, Expression, Identifier, Number, Statement};

pub fn ident(name: &str) -> Identifier {
    Identifier::new(name)
}

pub fn expr_ident(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

pub fn num(value: impl Into<Number>) -> Expression {
    Expression::Number {
        value: value.into(),
    }
}

pub fn boolean(value: bool) -> Expression {
    Expression::Boolean { value }
}

pub fn string(value: &str) -> Expression {
    Expression::String {
        value: value.to_string(),
    }
}

pub fn character(value: char) -> Expression {
    Expression::Character { value }
}

pub fn null() -> Expression {
    Expression::Null
}

pub fn op(token: &str) -> Expression {
    Expression::Operator {
        token: token.to_string(),
    }
}

pub fn list(elements: Vec<Expression>) -> Expression {
    Expression::List { elements }
}

pub fn seq(start: Expression, stop: Expression, step: Option<Expression>) -> Expression {
    Expression::Sequence {
        start: Box::new(start),
        stop: Box::new(stop),
        step: step.map(Box::new),
    }
}

pub fn cond(left: Expression, operator: Expression, right: Expression) -> Expression {
    Expression::Condition {
        left: Box::new(left),
        operator: Box::new(operator),
        right: Box::new(right),
    }
}

pub fn nested(inner: Expression) -> Expression {
    Expression::Nested {
        inner: Box::new(inner),
    }
}

pub fn assign(target: &str, value: Expression) -> Statement {
    Statement::Assignment {
        target: ident(target),
        value,
    }
}

pub fn ret(value: Option<Expression>) -> Statement {
    Statement::Return { value }
}

pub fn structure(name: &str, members: Vec<Expression>) -> Statement {
    Statement::Structure {
        name: ident(name),
        members,
    }
}

pub fn while_loop(condition: Expression, body: Vec<Statement>) -> Statement {
    Statement::While { condition, body }
}

pub fn for_loop(index: &str, iterable: Expression, body: Vec<Statement>) -> Statement {
    Statement::For {
        index: ident(index),
        iterable,
        body,
    }
}

pub fn func(name: &str, params: Vec<Expression>, body: Vec<Statement>) -> Statement {
    Statement::Function {
        name: ident(name),
        params,
        body,
    }
}

pub fn branch(condition: Expression, body: Vec<Statement>) -> Branch {
    Branch { condition, body }
}

/// A conditional with only an `if` arm.
pub fn if_then(condition: Expression, body: Vec<Statement>) -> Statement {
    if_else(condition, body, None, None)
}

pub fn if_else(
    condition: Expression,
    body: Vec<Statement>,
    elif_branch: Option<Branch>,
    else_body: Option<Vec<Statement>>,
) -> Statement {
    Statement::Conditional {
        if_branch: branch(condition, body),
        elif_branch,
        else_body,
    }
}

/// An expression carrying a tag this crate does not know.
pub fn unknown_expr(kind: &str) -> Expression {
    Expression::Unknown {
        kind: kind.to_string(),
    }
}

/// A statement carrying a tag this crate does not know.
pub fn unknown_stmt(kind: &str) -> Statement {
    Statement::Unknown {
        kind: kind.to_string(),
    }
}
