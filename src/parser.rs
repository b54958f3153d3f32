use std::collections::HashMap;

use crate::{
    ast::{Expression, ExpressionStatement, Program, Token, TokenKind},
    lexer::Lexer,
};

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Option<Expression>) -> Option<Expression>;

/// Binding power levels for the Pratt loop.
///
/// `Prefix` is never mapped to an infix token; it only serves as the
/// minimum binding power when parsing a prefix operator's operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Prefix,
    Index,
}

/// Pratt parser over a JSL token stream.
///
/// Owns its [`Lexer`] and two tokens of lookahead. `parse_program` never
/// panics: every recoverable failure is appended to [`Parser::errors`] and
/// parsing continues, so one pass can surface several independent problems.
/// A non-empty error list is a compile failure even when a partial program
/// was produced.
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    /// Accumulated diagnostics, in source order
    pub errors: Vec<String>,
    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        parser.register_prefix(TokenKind::Dot, Parser::parse_select_expression);
        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        parser.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        // Unreachable from the lexer, which folds '-' into identifier runs,
        // but kept registered so the token kind stays wired end to end.
        parser.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        parser.register_infix(TokenKind::LBracket, Parser::parse_index_expression);

        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, func: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, func);
    }

    fn register_infix(&mut self, kind: TokenKind, func: InfixParseFn) {
        self.infix_parse_fns.insert(kind, func);
    }

    // ------------------------------------------------------------------
    // Token handling
    // ------------------------------------------------------------------

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, kind: TokenKind) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            kind, self.peek_token.kind
        ));
    }

    fn no_prefix_parse_fn_error(&mut self) {
        self.errors.push(format!(
            "prefix parse func for {} not found",
            self.cur_token.literal
        ));
    }

    fn peek_precedence(&self) -> Precedence {
        Parser::precedence_of(self.peek_token.kind)
    }

    /// Only `[` carries infix binding power; everything else is `Lowest`.
    fn precedence_of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Always returns a program; callers must treat an empty statement list
    /// and a non-empty [`Parser::errors`] list as two independent failure
    /// signals.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            let statement = self.parse_expression_statement();
            program.statements.push(statement);
            self.next_token();
        }

        program
    }

    // JSL only has one kind of statement.
    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        ExpressionStatement {
            token: self.cur_token.clone(),
            expression: self.parse_expression(Precedence::Lowest),
        }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.cur_token.kind).copied() else {
            self.no_prefix_parse_fn_error();
            return None;
        };
        let mut left = prefix(self);

        // A dot never binds two expressions together: `.a.b` is two
        // statements. Only an index suffix extends the current expression.
        while !self.peek_token_is(TokenKind::Dot) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek_token.kind).copied() else {
                return left;
            };
            self.next_token();
            left = infix(self, left);
        }

        left
    }

    /// A select expression is represented by the following grammar:
    /// `.<identifier>`
    fn parse_select_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        Some(Expression::Select {
            token,
            key: self.cur_token.literal.clone(),
        })
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        })
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { token, value }),
            Err(_) => {
                self.errors
                    .push(format!("could not parse {} as integer", token.literal));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix);
        Some(Expression::Prefix {
            token,
            operator,
            right: right.map(Box::new),
        })
    }

    /// An index expression is represented by the following grammar:
    /// `<expression>[<integer literal>]`
    fn parse_index_expression(&mut self, left: Option<Expression>) -> Option<Expression> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Int) {
            return None;
        }
        let index = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expression::Index {
            token,
            left: left.map(Box::new),
            index: index.map(Box::new),
        })
    }
}
