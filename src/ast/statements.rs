use crate::ast::{Expression, Token};

/// One top-level clause of a selector program.
///
/// A path like `.data.items[2]` is a sequence of these; each statement
/// operates on the value produced by the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The token the statement started at (always a `.` in well-formed input)
    pub token: Token,

    /// The parsed expression, or `None` when its prefix parse failed
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }

    /// Rendering used in `ExpressionNotFound` payloads; empty when the
    /// statement holds no expression.
    pub fn description(&self) -> String {
        match &self.expression {
            Some(expression) => expression.token_literal().to_string(),
            None => String::new(),
        }
    }
}
