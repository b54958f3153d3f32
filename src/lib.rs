pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod parser;

pub use ast::{Expression, ExpressionStatement, Program, Token, TokenKind};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::Lexer;
pub use parser::Parser;

use serde_json::Value;

/// Top-level error for [`compile`] and [`select`].
#[derive(Debug, Clone, PartialEq)]
pub enum JslError {
    /// The path compiled to zero statements (e.g. an empty string)
    EmptyProgram,

    /// The parser accumulated diagnostics; the path is not valid JSL
    Parse(Vec<String>),

    /// Compilation succeeded but evaluation against the document failed
    Eval(EvalError),
}

impl std::fmt::Display for JslError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JslError::EmptyProgram => write!(f, "selector compiles to an empty program"),
            JslError::Parse(errors) => write!(f, "parse failed: {}", errors.join("; ")),
            JslError::Eval(error) => write!(f, "evaluation failed: {}", error),
        }
    }
}

impl std::error::Error for JslError {}

impl From<EvalError> for JslError {
    fn from(error: EvalError) -> Self {
        JslError::Eval(error)
    }
}

/// Compiles a selector path into a reusable [`Program`].
///
/// Fails fast with [`JslError::EmptyProgram`] when the path yields no
/// statements, and with [`JslError::Parse`] when the parser accumulated
/// any diagnostics — a partial program is never returned. The compiled
/// program is immutable and may be evaluated any number of times.
///
/// # Examples
///
/// ```
/// use jsl_lang::compile;
///
/// let program = compile(".data.items[2]").unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn compile(path: &str) -> Result<Program, JslError> {
    let lexer = Lexer::new(path);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if program.statements.is_empty() {
        return Err(JslError::EmptyProgram);
    }
    if !parser.errors.is_empty() {
        return Err(JslError::Parse(parser.errors));
    }

    Ok(program)
}

/// Extracts the value a selector path points at within a JSON document.
///
/// # Examples
///
/// ```
/// use jsl_lang::select;
/// use serde_json::json;
///
/// let document = json!({"data": {"items": ["a", "b", "c"]}});
/// assert_eq!(select(".data.items[1]", &document).unwrap(), json!("b"));
/// ```
pub fn select(path: &str, document: &Value) -> Result<Value, JslError> {
    let program = compile(path)?;
    let result = Evaluator::new().eval_program(&program, document)?;
    Ok(result)
}
