use std::fmt;

/// The kind of a lexical token.
///
/// Parser diagnostics embed the `Display` form of a kind verbatim
/// (e.g. `"expected next token to be IDENT, got DOT instead"`), so the
/// uppercase names are part of the error contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Statement opener and select operator
    ///
    /// # Examples
    /// ```text
    /// .data
    /// .items
    /// ```
    Dot,

    /// Field name selected by a dot, or a bare index operand
    ///
    /// Any maximal run of characters that is not `.`, `[` or `]`.
    ///
    /// # Examples
    /// ```text
    /// data
    /// key_with_line-break
    /// ```
    Ident,

    /// Unsigned integer literal (array index)
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 224
    /// ```
    Int,

    /// Unary minus
    ///
    /// Registered with the parser but never produced by the lexer: a `-`
    /// is always absorbed into the surrounding `Ident` run.
    Minus,

    /// Left bracket opening an index suffix
    LBracket,

    /// Right bracket closing an index suffix
    RBracket,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Dot => "DOT",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Minus => "MINUS",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// A lexical token: a kind plus the literal text it was scanned from.
///
/// Tokens are plain values compared structurally; the lexer produces them
/// one at a time and they are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token carries an empty literal.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}
