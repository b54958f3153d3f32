// tests/parser_tests.rs

use jsl_lang::ast::{Expression, Program, TokenKind};
use jsl_lang::lexer::Lexer;
use jsl_lang::parser::Parser;

fn parse(input: &str) -> (Program, Vec<String>) {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    (program, parser.errors)
}

// ============================================================================
// Statement Splitting
// ============================================================================

#[test]
fn test_parse_program_with_one_statement() {
    let (program, errors) = parse(".data");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    let stmt = &program.statements[0];
    assert_eq!(stmt.token_literal(), ".");
    match stmt.expression.as_ref().unwrap() {
        Expression::Select { token, key } => {
            assert_eq!(token.literal, ".");
            assert_eq!(key, "data");
        }
        other => panic!("Expected select expression, got {:?}", other),
    }
}

#[test]
fn test_parse_program_with_two_statements() {
    // A dot never nests: ".data.images" is two separate statements.
    let (program, errors) = parse(".data.images");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 2);

    let expected_keys = ["data", "images"];
    for (stmt, expected) in program.statements.iter().zip(expected_keys) {
        match stmt.expression.as_ref().unwrap() {
            Expression::Select { token, key } => {
                assert_eq!(token.literal, ".");
                assert_eq!(key, expected);
            }
            other => panic!("Expected select expression, got {:?}", other),
        }
    }
}

#[test]
fn test_program_token_literal() {
    let (program, _) = parse(".data");
    assert_eq!(program.token_literal(), ".");
    assert_eq!(Program::new().token_literal(), "");
}

// ============================================================================
// Index Expressions
// ============================================================================

#[test]
fn test_parse_program_with_index_expression() {
    let (program, errors) = parse(".images[224]");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    let stmt = &program.statements[0];
    assert_eq!(stmt.token_literal(), ".");

    match stmt.expression.as_ref().unwrap() {
        Expression::Index { left, index, .. } => {
            match left.as_deref().unwrap() {
                Expression::Select { token, key } => {
                    assert_eq!(key, "images");
                    assert_eq!(token.kind, TokenKind::Dot);
                }
                other => panic!("Expected select as index left, got {:?}", other),
            }
            match index.as_deref().unwrap() {
                Expression::IntegerLiteral { token, value } => {
                    assert_eq!(*value, 224);
                    assert_eq!(token.kind, TokenKind::Int);
                }
                other => panic!("Expected integer literal index, got {:?}", other),
            }
        }
        other => panic!("Expected index expression, got {:?}", other),
    }
}

#[test]
fn test_index_binds_tighter_than_next_dot() {
    // ".images[224].id" is two statements: Index(Select("images"), 224)
    // followed by Select("id").
    let (program, errors) = parse(".images[224].id");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 2);

    match program.statements[0].expression.as_ref().unwrap() {
        Expression::Index { left, index, .. } => {
            assert!(matches!(
                left.as_deref(),
                Some(Expression::Select { key, .. }) if key == "images"
            ));
            assert!(matches!(
                index.as_deref(),
                Some(Expression::IntegerLiteral { value: 224, .. })
            ));
        }
        other => panic!("Expected index expression, got {:?}", other),
    }

    match program.statements[1].expression.as_ref().unwrap() {
        Expression::Select { token, key } => {
            assert_eq!(token.literal, ".");
            assert_eq!(key, "id");
        }
        other => panic!("Expected select expression, got {:?}", other),
    }
}

#[test]
fn test_chained_index_statements() {
    let (program, errors) = parse(".data.items[2].image.url[0]");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 4);

    assert!(matches!(
        program.statements[0].expression,
        Some(Expression::Select { .. })
    ));
    assert!(matches!(
        program.statements[1].expression,
        Some(Expression::Index { .. })
    ));
    assert!(matches!(
        program.statements[2].expression,
        Some(Expression::Select { .. })
    ));
    assert!(matches!(
        program.statements[3].expression,
        Some(Expression::Index { .. })
    ));
}

// ============================================================================
// Error Accumulation
// ============================================================================

#[test]
fn test_parse_program_with_invalid_index_operand() {
    let (_, errors) = parse(".data.images[something]");
    assert_eq!(
        errors,
        vec![
            "expected next token to be INT, got IDENT instead",
            "prefix parse func for ] not found",
        ]
    );
}

#[test]
fn test_parse_program_with_errors() {
    // "..[]" is invalid JSL; parsing recovers after each failure so all
    // four diagnostics surface in one pass, in source order.
    let (_, errors) = parse("..[]");
    assert_eq!(
        errors,
        vec![
            "expected next token to be IDENT, got DOT instead",
            "expected next token to be IDENT, got LBRACKET instead",
            "expected next token to be INT, got RBRACKET instead",
            "prefix parse func for ] not found",
        ]
    );
}

#[test]
fn test_trailing_dot_reports_eof() {
    let (program, errors) = parse(".name.");
    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        errors,
        vec!["expected next token to be IDENT, got EOF instead"]
    );
    assert!(program.statements[1].expression.is_none());
}

#[test]
fn test_unclosed_index_reports_eof() {
    let (_, errors) = parse(".items[2");
    assert_eq!(
        errors,
        vec!["expected next token to be RBRACKET, got EOF instead"]
    );
}

#[test]
fn test_integer_overflow_is_a_diagnostic() {
    // 20 digits cannot fit an i64; the literal run still lexes as one INT.
    let (_, errors) = parse(".items[99999999999999999999]");
    assert!(
        errors
            .iter()
            .any(|e| e == "could not parse 99999999999999999999 as integer"),
        "Missing overflow diagnostic, got: {:?}",
        errors
    );
}

#[test]
fn test_statement_with_failed_parse_keeps_no_expression() {
    let (program, errors) = parse("..");
    assert!(!errors.is_empty());
    assert!(program.statements.iter().all(|s| s.expression.is_none()));
}

// ============================================================================
// Bare Identifiers
// ============================================================================

#[test]
fn test_bare_identifier_parses_without_errors() {
    // "*name" is one identifier run; it only fails later, at evaluation.
    let (program, errors) = parse("*name");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(
        program.statements[0].expression.as_ref().unwrap(),
        Expression::Identifier { value, .. } if value == "*name"
    ));
}
