//! Tokenizer for filter expressions.
//!
//! The lexer is a cursor over the input that hands out one token per call.
//! Positions are counted in characters, not bytes, so they line up with what a
//! user sees in the expression text.

use tracing::trace;

use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// On-demand tokenizer over a borrowed input string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset into `input`.
    offset: usize,
    /// Character offset into `input`.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
        }
    }

    /// The input this lexer reads from.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current cursor offset in characters.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewind to the start of the input.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.position = 0;
    }

    /// Tokenize the remaining input, including the trailing `Eof` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let done = tok.is_eof();
            tokens.push(tok);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    /// Produce the next token and advance past it.
    ///
    /// Once the input is exhausted every call returns the same `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnterminatedString`] if a string literal has no
    /// closing quote.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.position;
        let Some(ch) = self.peek() else {
            return Ok(Token::eof(start));
        };

        let tok = match ch {
            '(' => self.single(TokenKind::LParen, ch),
            ')' => self.single(TokenKind::RParen, ch),
            ',' => self.single(TokenKind::Comma, ch),
            '"' => self.read_string()?,
            c if c.is_ascii_alphabetic() => self.read_identifier(),
            _ => self.single(TokenKind::Unknown, ch),
        };

        trace!(kind = %tok.kind, value = %tok.value, position = tok.position, "lexed token");
        Ok(tok)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump(ch);
        }
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        let position = self.position;
        self.bump(ch);
        Token::new(kind, ch.to_string(), position)
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.bump('"');
        let content_start = self.offset;

        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString { position: start }),
                Some('"') => {
                    let value = &self.input[content_start..self.offset];
                    self.bump('"');
                    return Ok(Token::new(TokenKind::StringLiteral, value, start));
                }
                Some('\\') => {
                    self.bump('\\');
                    // The escaped character is kept as-is, backslash included.
                    match self.peek() {
                        Some(escaped) => self.bump(escaped),
                        None => return Err(LexError::UnterminatedString { position: start }),
                    }
                }
                Some(ch) => self.bump(ch),
            }
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        let begin = self.offset;
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            self.bump(ch);
        }
        Token::new(TokenKind::Identifier, &self.input[begin..self.offset], start)
    }
}
