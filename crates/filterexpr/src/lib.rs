//! Lexer and recursive-descent parser for filter expressions.
//!
//! Filter expressions are nested function calls whose leaves are quoted
//! strings, for example `and(eq("a", "b"), or(gt("c", "d"), like("e", "f")))`.
//! The pipeline is:
//!
//! 1. **Lexing**: [`Lexer`] turns the input into [`Token`]s on demand.
//! 2. **Parsing**: [`Parser`] pulls tokens with one-token lookahead and builds a
//!    [`Program`].
//! 3. **Translation**: an external consumer walks the tree, typically through
//!    the [`Translator`] trait, and maps it onto a backend predicate.
//!
//! Function names carry no meaning to the parser. `and`, `or`, `eq` and any
//! other identifier are all plain calls; deciding which names are valid is the
//! consumer's job.
//!
//! # Examples
//!
//! ```
//! use filterexpr::{Argument, parse};
//!
//! let program = parse(r#"and(eq("status", "open"), isNull("owner"))"#).unwrap();
//! assert_eq!(program.expression.function_name, "and");
//! assert_eq!(program.expression.args.len(), 2);
//! assert!(matches!(&program.expression.args[1], Argument::Call(c) if c.function_name == "isNull"));
//! ```

mod ast;
mod config;
mod error;
mod lexer;
mod parser;
mod token;
mod translate;

pub use ast::{Argument, CallExpression, Program, StringLiteral};
pub use config::ParserConfig;
pub use error::{LexError, ParseError, ParseResult, SyntaxError};
pub use lexer::Lexer;
pub use parser::{Parser, parse, parse_with_config};
pub use token::{Token, TokenKind};
pub use translate::{Translator, collect_function_names, collect_literal_values, translate};
