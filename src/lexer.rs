use crate::ast::{Token, TokenKind};

/// Lexical scanner for JSL selector paths.
///
/// Stateful cursor over one input string; build a fresh lexer per path.
/// Only ASCII input is supported.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Returns the next token, advancing the cursor. Once the input is
    /// exhausted this keeps returning `Eof` tokens forever.
    pub fn next_token(&mut self) -> Token {
        match self.current_char() {
            None => Token::eof(),
            Some('.') => {
                self.advance();
                Token::new(TokenKind::Dot, ".")
            }
            Some('[') => {
                self.advance();
                Token::new(TokenKind::LBracket, "[")
            }
            Some(']') => {
                self.advance();
                Token::new(TokenKind::RBracket, "]")
            }
            Some(ch) if ch.is_ascii_digit() => Token::new(TokenKind::Int, self.read_number()),
            Some(_) => Token::new(TokenKind::Ident, self.read_identifier()),
        }
    }

    /// Maximal run of ASCII digits starting at the cursor. Sign characters
    /// are not part of a number; a `-` lands in an identifier run instead.
    fn read_number(&mut self) -> String {
        let mut number = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        number
    }

    /// Maximal run of characters that are none of `.`, `[`, `]`.
    fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(ch) = self.current_char() {
            if matches!(ch, '.' | '[' | ']') {
                break;
            }
            ident.push(ch);
            self.advance();
        }
        ident
    }
}

#[test]
fn test_single_select() {
    let mut lexer = Lexer::new(".data");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Dot, "."));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "data"));
    assert_eq!(lexer.next_token(), Token::eof());
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new(".a");
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::eof());
    assert_eq!(lexer.next_token(), Token::eof());
    assert_eq!(lexer.next_token(), Token::eof());
}
