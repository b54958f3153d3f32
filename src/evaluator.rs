use serde_json::Value;

use crate::ast::{Expression, ExpressionStatement, Program};

/// Errors that can occur while evaluating a compiled selector.
///
/// Evaluation is first-failure-wins: any of these aborts the whole walk
/// and there is no partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A select was applied to a value that is not an object
    InvalidNestedKeySequence(String),

    /// The selected key is absent, or bound to JSON null
    ValueNotFoundForKey(String),

    /// A node kind with no evaluation rule was reached directly
    NodeEvaluationNotSupported(String),

    /// The document does not have the shape the selector assumes:
    /// indexing a non-array, a non-integer index, or an out-of-range index
    InvalidJson,

    /// A statement or operand was left empty by a failed parse
    ExpressionNotFound(String),

    /// A prefix operator other than `-`
    PrefixNotSupported(String),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidNestedKeySequence(key) => {
                write!(f, "invalid nested key sequence at key '{}'", key)
            }
            EvalError::ValueNotFoundForKey(key) => {
                write!(f, "value not found for key '{}'", key)
            }
            EvalError::NodeEvaluationNotSupported(literal) => {
                write!(f, "evaluation not supported for node '{}'", literal)
            }
            EvalError::InvalidJson => write!(f, "invalid json for selector"),
            EvalError::ExpressionNotFound(description) => {
                write!(f, "expression not found: '{}'", description)
            }
            EvalError::PrefixNotSupported(operator) => {
                write!(f, "prefix operator '{}' not supported", operator)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Tree-walking evaluator for compiled selectors.
///
/// Holds no state: the same evaluator may be reused across calls, and a
/// single [`Program`] may be evaluated concurrently against distinct
/// documents. Neither the AST nor the document is ever mutated.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates a compiled program against a JSON document.
    ///
    /// Statements chain: the value selected by `.data` becomes the input
    /// of the following `.items` statement, and so on. Returns the final
    /// value, or the first evaluation error encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsl_lang::{Evaluator, Lexer, Parser};
    /// use serde_json::json;
    ///
    /// let mut parser = Parser::new(Lexer::new(".a.b"));
    /// let program = parser.parse_program();
    ///
    /// let document = json!({"a": {"b": "c"}});
    /// let result = Evaluator::new().eval_program(&program, &document).unwrap();
    /// assert_eq!(result, json!("c"));
    /// ```
    pub fn eval_program(&self, program: &Program, document: &Value) -> Result<Value, EvalError> {
        let mut value = document.clone();
        for statement in &program.statements {
            value = self.eval_statement(statement, &value)?;
        }
        Ok(value)
    }

    fn eval_statement(
        &self,
        statement: &ExpressionStatement,
        json: &Value,
    ) -> Result<Value, EvalError> {
        let expression = statement
            .expression
            .as_ref()
            .ok_or_else(|| EvalError::ExpressionNotFound(statement.description()))?;
        self.eval_expression(expression, json)
    }

    fn eval_expression(&self, expression: &Expression, json: &Value) -> Result<Value, EvalError> {
        match expression {
            Expression::Select { key, .. } => self.eval_select(key, json),
            Expression::Index { .. } => self.eval_index(expression, json),
            Expression::IntegerLiteral { value, .. } => Ok(Value::from(*value)),
            Expression::Prefix { .. } => self.eval_prefix(expression, json),
            Expression::Identifier { token, .. } => Err(EvalError::NodeEvaluationNotSupported(
                token.literal.clone(),
            )),
        }
    }

    fn eval_select(&self, key: &str, json: &Value) -> Result<Value, EvalError> {
        let object = json
            .as_object()
            .ok_or_else(|| EvalError::InvalidNestedKeySequence(key.to_string()))?;
        match object.get(key) {
            None | Some(Value::Null) => Err(EvalError::ValueNotFoundForKey(key.to_string())),
            Some(value) => Ok(value.clone()),
        }
    }

    fn eval_index(&self, expression: &Expression, json: &Value) -> Result<Value, EvalError> {
        let Expression::Index { left, index, .. } = expression else {
            unreachable!("eval_index called on a non-index node");
        };
        let missing = || EvalError::ExpressionNotFound(expression.description());
        let left = left.as_ref().ok_or_else(missing)?;
        let index = index.as_ref().ok_or_else(missing)?;

        let array_value = self.eval_expression(left, json)?;
        let array = array_value.as_array().ok_or(EvalError::InvalidJson)?;

        let position = self.eval_expression(index, json)?;
        let position = position.as_i64().ok_or(EvalError::InvalidJson)?;

        usize::try_from(position)
            .ok()
            .and_then(|i| array.get(i))
            .cloned()
            .ok_or(EvalError::InvalidJson)
    }

    fn eval_prefix(&self, expression: &Expression, json: &Value) -> Result<Value, EvalError> {
        let Expression::Prefix {
            operator, right, ..
        } = expression
        else {
            unreachable!("eval_prefix called on a non-prefix node");
        };
        let right = right
            .as_ref()
            .ok_or_else(|| EvalError::ExpressionNotFound(expression.description()))?;

        match operator.as_str() {
            // Quirk inherited from the language definition: the operand
            // round-trips through integer coercion but the sign is never
            // applied.
            "-" => {
                let value = self.eval_expression(right, json)?;
                let integer = value.as_i64().ok_or(EvalError::InvalidJson)?;
                Ok(Value::from(integer))
            }
            _ => Err(EvalError::PrefixNotSupported(operator.clone())),
        }
    }
}
