//! Token types produced by the lexer.

use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// A run of ASCII letters.
    Identifier,
    /// A double-quoted string; the token value excludes the quotes.
    StringLiteral,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// End of input.
    Eof,
    /// Any single character the lexer does not recognize.
    Unknown,
}

impl TokenKind {
    /// Upper-case name used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::StringLiteral => "STRING_LITERAL",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Comma => "COMMA",
            Self::Eof => "EOF",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexeme with its kind and starting character offset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// What kind of lexeme this is.
    pub kind: TokenKind,
    /// The lexeme text. String literals exclude their quotes; `Eof` is empty.
    pub value: String,
    /// Character offset of the first character of the lexeme.
    pub position: usize,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    /// Create an end-of-input token at `position`.
    #[must_use]
    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), position)
    }

    /// Returns `true` if this is the end-of-input token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns `true` if this is an identifier spelled exactly `and` or `or`.
    #[must_use]
    pub fn is_logical_operator(&self) -> bool {
        self.kind == TokenKind::Identifier && matches!(self.value.as_str(), "and" | "or")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}) at {}", self.value, self.kind, self.position)
    }
}
