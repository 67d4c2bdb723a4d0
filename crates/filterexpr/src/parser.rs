//! Recursive-descent parser for filter expressions.
//!
//! Grammar:
//!
//! ```text
//! Program        := Expression EOF
//! Expression     := CallExpression | '(' Expression ')'
//! CallExpression := Identifier '(' ArgumentList? ')'
//! ArgumentList   := Argument (',' Argument)*
//! Argument       := StringLiteral | CallExpression
//! ```
//!
//! The parser holds exactly one lookahead token and never backtracks. It pulls
//! tokens from the [`Lexer`] as it goes and fails on the first violation.

use tracing::debug;

use crate::ast::{Argument, CallExpression, Program, StringLiteral};
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Single-use parser over one input string.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The lookahead token.
    current: Token,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with default limits.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Create a parser with explicit limits.
    #[must_use]
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: Token::eof(0),
            config,
            depth: 0,
        }
    }

    /// Parse the whole input into a [`Program`].
    ///
    /// The parser is consumed; on success the caller owns the only reference to
    /// the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on the first lexical error, grammar violation or
    /// exceeded limit.
    pub fn parse(mut self) -> ParseResult<Program> {
        let input_len = self.lexer.input().chars().count();
        debug!(input_len, "parsing filter expression");

        let result = self.parse_program(input_len);
        match &result {
            Ok(program) => debug!(depth = program.expression.depth(), "parsed filter expression"),
            Err(e) => debug!(error = %e, "rejected filter expression"),
        }
        result
    }

    fn parse_program(&mut self, input_len: usize) -> ParseResult<Program> {
        if input_len > self.config.max_input_len {
            return Err(ParseError::InputTooLong {
                len: input_len,
                max_input_len: self.config.max_input_len,
            });
        }

        // Prime the lookahead.
        self.advance()?;

        let expression = self.parse_expression()?;

        if !self.current.is_eof() {
            let token = self.current.clone();
            return Err(if token.is_logical_operator() {
                SyntaxError::BareLogicalOperator { token }
            } else {
                SyntaxError::TrailingInput { token }
            }
            .into());
        }

        Ok(Program { expression })
    }
}

// ---------------------------------------------------------------------------
// Token handling
// ---------------------------------------------------------------------------

impl Parser<'_> {
    /// Replace the lookahead with the next token and return the old one.
    fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Enter one nesting level opened by the token at `position`.
    fn enter(&mut self, position: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                max_depth: self.config.max_depth,
                position,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

// ---------------------------------------------------------------------------
// Productions
// ---------------------------------------------------------------------------

impl Parser<'_> {
    /// `Expression := CallExpression | '(' Expression ')'`
    fn parse_expression(&mut self) -> ParseResult<CallExpression> {
        match self.current.kind {
            TokenKind::LParen => self.parse_group(),
            TokenKind::Identifier => self.parse_call(),
            _ => Err(SyntaxError::ExpectedExpression {
                token: self.current.clone(),
            }
            .into()),
        }
    }

    /// `'(' Expression ')'`
    fn parse_group(&mut self) -> ParseResult<CallExpression> {
        let open = self.advance()?;
        self.enter(open.position)?;

        let expression = self.parse_expression()?;

        if !self.at(TokenKind::RParen) {
            let token = self.current.clone();
            return Err(if token.is_logical_operator() {
                SyntaxError::BareLogicalOperator { token }
            } else {
                SyntaxError::UnclosedGroup { token }
            }
            .into());
        }
        self.advance()?;
        self.leave();

        Ok(expression)
    }

    /// `CallExpression := Identifier '(' ArgumentList? ')'`
    fn parse_call(&mut self) -> ParseResult<CallExpression> {
        let name = self.advance()?;
        self.finish_call(name)
    }

    /// `'(' ArgumentList? ')'` following an already consumed function name.
    fn finish_call(&mut self, name: Token) -> ParseResult<CallExpression> {
        if !self.at(TokenKind::LParen) {
            return Err(SyntaxError::ExpectedOpenParen {
                name: name.value,
                token: self.current.clone(),
            }
            .into());
        }
        self.enter(name.position)?;
        self.advance()?;

        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            args.push(self.parse_argument()?);
            while self.at(TokenKind::Comma) {
                self.advance()?;
                args.push(self.parse_argument()?);
            }
        }

        if !self.at(TokenKind::RParen) {
            return Err(SyntaxError::UnclosedCall {
                name: name.value,
                token: self.current.clone(),
            }
            .into());
        }
        self.advance()?;
        self.leave();

        Ok(CallExpression {
            function_name: name.value,
            args,
        })
    }

    /// `Argument := StringLiteral | CallExpression`
    fn parse_argument(&mut self) -> ParseResult<Argument> {
        match self.current.kind {
            TokenKind::StringLiteral => {
                let token = self.advance()?;
                Ok(Argument::StringLiteral(StringLiteral { value: token.value }))
            }
            TokenKind::Identifier => Ok(Argument::Call(self.parse_call()?)),
            _ => Err(SyntaxError::InvalidArgument {
                token: self.current.clone(),
            }
            .into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a filter expression with default limits.
///
/// # Errors
///
/// Returns [`ParseError`] if the expression is malformed.
pub fn parse(input: &str) -> ParseResult<Program> {
    Parser::new(input).parse()
}

/// Parse a filter expression with explicit limits.
///
/// # Errors
///
/// Returns [`ParseError`] if the expression is malformed or exceeds a limit.
pub fn parse_with_config(input: &str, config: ParserConfig) -> ParseResult<Program> {
    Parser::with_config(input, config).parse()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
