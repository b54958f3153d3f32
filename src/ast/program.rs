use crate::ast::ExpressionStatement;

/// Complete compiled selector.
///
/// The root of the AST: an ordered sequence of statements that each feed
/// their result into the next. Immutable once parsed; a single `Program`
/// may be evaluated repeatedly against different documents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order
    pub statements: Vec<ExpressionStatement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}
