//! Error types for lexing and parsing.

use crate::token::Token;

/// Errors raised while tokenizing.
///
/// Kept apart from [`SyntaxError`]: this is the only condition that stops the
/// lexer before it can produce a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal was opened but never closed.
    #[error("Unterminated string literal starting at position {position}.")]
    UnterminatedString {
        /// Offset of the opening quote.
        position: usize,
    },
}

impl LexError {
    /// Character offset the error refers to.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedString { position } => *position,
        }
    }
}

/// Grammar violations detected by the parser.
///
/// The `Display` text of each variant is stable; downstream consumers match on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// An expression started with something other than an identifier or `(`.
    #[error(
        "Unexpected token '{}' (type {}). Expected a function call or a '('.",
        .token.value,
        .token.kind
    )]
    ExpectedExpression {
        /// The offending token.
        token: Token,
    },
    /// A function name was not followed by `(`.
    #[error("Expected '(' after function name '{name}'.")]
    ExpectedOpenParen {
        /// The function name.
        name: String,
        /// The token found instead of `(`.
        token: Token,
    },
    /// A function call's argument list was not closed.
    #[error("Expected ')' to close function call '{name}'.")]
    UnclosedCall {
        /// The function name.
        name: String,
        /// The token found instead of `)` or `,`.
        token: Token,
    },
    /// A parenthesized group was not closed.
    #[error("Expected ')' to close parenthesized expression.")]
    UnclosedGroup {
        /// The token found instead of `)`.
        token: Token,
    },
    /// An argument was neither a string literal nor a nested call.
    #[error(
        "Unexpected token '{}' (type {}). Expected a string literal or a nested function call as an argument.",
        .token.value,
        .token.kind
    )]
    InvalidArgument {
        /// The offending token.
        token: Token,
    },
    /// Input continued after a complete expression.
    #[error(
        "Unexpected token '{}' at position {}. Expected end of input.",
        .token.value,
        .token.position
    )]
    TrailingInput {
        /// The first trailing token.
        token: Token,
    },
    /// `and`/`or` appeared as a bare infix word instead of a call.
    #[error("Unexpected logical operator '{}' not in a function call.", .token.value)]
    BareLogicalOperator {
        /// The `and`/`or` identifier token.
        token: Token,
    },
}

impl SyntaxError {
    /// The token that triggered the error.
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::ExpectedExpression { token }
            | Self::ExpectedOpenParen { token, .. }
            | Self::UnclosedCall { token, .. }
            | Self::UnclosedGroup { token }
            | Self::InvalidArgument { token }
            | Self::TrailingInput { token }
            | Self::BareLogicalOperator { token } => token,
        }
    }
}

/// Any failure of the top-level parse operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token stream does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The input exceeds the configured length limit.
    #[error("Input of {len} characters exceeds the limit of {max_input_len}.")]
    InputTooLong {
        /// Input length in characters.
        len: usize,
        /// Configured limit.
        max_input_len: usize,
    },

    /// Calls or groups are nested deeper than the configured limit.
    #[error("Expression nesting exceeds the limit of {max_depth} at position {position}.")]
    NestingTooDeep {
        /// Configured limit.
        max_depth: usize,
        /// Offset of the token that would have opened the next level.
        position: usize,
    },
}

impl ParseError {
    /// Best known character offset for the failure, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Syntax(e) => Some(e.token().position),
            Self::InputTooLong { .. } => None,
            Self::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}

/// Convenience result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
