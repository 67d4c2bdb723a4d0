//! AST types for filter expressions.
//!
//! The tree is built bottom-up by the parser and never mutated afterwards. Each
//! node exclusively owns its children. Concrete syntax (parentheses used for
//! grouping, commas) does not survive into the tree.
//!
//! Only trees returned by the parser are guaranteed to satisfy the grammar.
//! Trees built with the constructors below or deserialized from JSON are not
//! checked; call [`Program::is_well_formed`] before trusting them.

use std::fmt;

/// Root of a parsed filter expression.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// The top-level call.
    pub expression: CallExpression,
}

impl Program {
    /// Returns `true` if every function name in the tree is one or more ASCII letters.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.expression.is_well_formed()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A function call such as `eq("a", "b")` or `isNull("column")`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    /// Function name, one or more ASCII letters.
    pub function_name: String,
    /// Arguments in source order; may be empty.
    pub args: Vec<Argument>,
}

impl CallExpression {
    /// Create a call node.
    ///
    /// `function_name` is not validated; see [`CallExpression::is_well_formed`].
    #[must_use]
    pub fn new(function_name: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            function_name: function_name.into(),
            args,
        }
    }

    /// Nesting depth of this call; a call without nested calls has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .args
            .iter()
            .map(|arg| match arg {
                Argument::Call(call) => call.depth(),
                Argument::StringLiteral(_) => 0,
            })
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if this call and every nested call has a name made of one
    /// or more ASCII letters.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.function_name.is_empty()
            && self.function_name.bytes().all(|b| b.is_ascii_alphabetic())
            && self.calls().all(CallExpression::is_well_formed)
    }

    /// Iterate over the nested calls among the arguments.
    pub fn calls(&self) -> impl Iterator<Item = &CallExpression> {
        self.args.iter().filter_map(|arg| match arg {
            Argument::Call(call) => Some(call),
            Argument::StringLiteral(_) => None,
        })
    }

    /// Iterate over the string literals among the arguments.
    pub fn literals(&self) -> impl Iterator<Item = &StringLiteral> {
        self.args.iter().filter_map(|arg| match arg {
            Argument::StringLiteral(lit) => Some(lit),
            Argument::Call(_) => None,
        })
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// A call argument.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Argument {
    /// A quoted string value.
    StringLiteral(StringLiteral),
    /// A nested call.
    #[serde(rename = "CallExpression")]
    Call(CallExpression),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StringLiteral(lit) => write!(f, "{lit}"),
            Self::Call(call) => write!(f, "{call}"),
        }
    }
}

impl From<StringLiteral> for Argument {
    fn from(lit: StringLiteral) -> Self {
        Self::StringLiteral(lit)
    }
}

impl From<CallExpression> for Argument {
    fn from(call: CallExpression) -> Self {
        Self::Call(call)
    }
}

/// A string literal with its quotes removed.
///
/// Backslash escapes are kept exactly as written, so `"a\"b"` has the value
/// `a\"b`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StringLiteral {
    /// Literal content; may be empty.
    pub value: String,
}

impl StringLiteral {
    /// Create a literal node.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}
