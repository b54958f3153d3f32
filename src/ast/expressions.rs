use crate::ast::Token;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Every variant carries the token that anchors it in the source path, so
/// evaluation errors can quote the offending literal. Children produced by
/// a failed sub-parse are `None`; the parser has already recorded a
/// diagnostic for them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Field selection (`.key`)
    ///
    /// # Examples
    /// ```text
    /// .data
    /// .sample_collection
    /// ```
    Select {
        /// The `.` token opening the selection
        token: Token,
        /// The field name to look up
        key: String,
    },

    /// Array indexing (`left[index]`)
    ///
    /// # Examples
    /// ```text
    /// .images[224]
    /// .cars[0]
    /// ```
    Index {
        /// The `[` token opening the suffix
        token: Token,
        /// The expression that must yield an array
        left: Option<Box<Expression>>,
        /// The expression that must yield an integer position
        index: Option<Box<Expression>>,
    },

    /// Bare identifier
    ///
    /// Only ever parsed as an index operand; reaching the evaluator
    /// directly is an error.
    Identifier { token: Token, value: String },

    /// Integer literal
    ///
    /// # Example
    /// ```text
    /// 224
    /// ```
    IntegerLiteral { token: Token, value: i64 },

    /// Unary prefix operator (`-` is the only one defined)
    Prefix {
        token: Token,
        operator: String,
        right: Option<Box<Expression>>,
    },
}

impl Expression {
    /// Literal text of the token anchoring this node.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Select { token, .. }
            | Expression::Index { token, .. }
            | Expression::Identifier { token, .. }
            | Expression::IntegerLiteral { token, .. }
            | Expression::Prefix { token, .. } => &token.literal,
        }
    }

    /// Human-readable rendering used in evaluation error payloads.
    ///
    /// Nodes with a missing child describe as the empty string.
    pub fn description(&self) -> String {
        match self {
            Expression::Select { token, key } => format!("{} {}", token.literal, key),
            Expression::Index { left, index, .. } => match (left, index) {
                (Some(left), Some(index)) => {
                    format!("({})[{}]", left.token_literal(), index.token_literal())
                }
                _ => String::new(),
            },
            Expression::Identifier { value, .. } => value.clone(),
            Expression::IntegerLiteral { value, .. } => value.to_string(),
            Expression::Prefix {
                operator, right, ..
            } => match right {
                Some(right) => format!("{} {}", operator, right.token_literal()),
                None => String::new(),
            },
        }
    }
}
