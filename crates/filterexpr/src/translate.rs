//! Walking a parsed [`Program`] on behalf of a backend.
//!
//! The parser attaches no meaning to function names. A backend implements
//! [`Translator`] to map calls onto its own predicate objects and to decide,
//! per string literal, whether the value names a column or is passed through
//! as a plain value. [`translate`] drives the walk bottom-up.
//!
//! The collection helpers let a backend validate a tree (unknown operators,
//! column names missing from its resolution table) before translating it.

use std::collections::HashSet;

use crate::ast::{Argument, CallExpression, Program};

/// Backend-side hooks invoked while walking a [`Program`].
pub trait Translator {
    /// The backend predicate or value type built for each node.
    type Output;
    /// The backend error type, e.g. for unknown function names.
    type Error;

    /// Build the node for a call once all of its arguments have been translated.
    fn call(&mut self, name: &str, args: Vec<Self::Output>) -> Result<Self::Output, Self::Error>;

    /// Build the node for a string literal passed directly to the call `enclosing`.
    fn literal(&mut self, enclosing: &str, value: &str) -> Result<Self::Output, Self::Error>;
}

/// Translate a whole program, children before parents, arguments in source order.
///
/// # Errors
///
/// Returns the first error raised by `translator`.
pub fn translate<T: Translator + ?Sized>(
    program: &Program,
    translator: &mut T,
) -> Result<T::Output, T::Error> {
    translate_call(&program.expression, translator)
}

fn translate_call<T: Translator + ?Sized>(
    call: &CallExpression,
    translator: &mut T,
) -> Result<T::Output, T::Error> {
    let mut args = Vec::with_capacity(call.args.len());
    for arg in &call.args {
        let out = match arg {
            Argument::StringLiteral(lit) => translator.literal(&call.function_name, &lit.value)?,
            Argument::Call(inner) => translate_call(inner, translator)?,
        };
        args.push(out);
    }
    translator.call(&call.function_name, args)
}

/// Collect every function name used in the program.
#[allow(clippy::implicit_hasher)]
pub fn collect_function_names(program: &Program, names: &mut HashSet<String>) {
    collect_names_from_call(&program.expression, names);
}

/// Collect every string literal value used in the program.
#[allow(clippy::implicit_hasher)]
pub fn collect_literal_values(program: &Program, values: &mut HashSet<String>) {
    collect_values_from_call(&program.expression, values);
}

fn collect_names_from_call(call: &CallExpression, names: &mut HashSet<String>) {
    names.insert(call.function_name.clone());
    for inner in call.calls() {
        collect_names_from_call(inner, names);
    }
}

fn collect_values_from_call(call: &CallExpression, values: &mut HashSet<String>) {
    for arg in &call.args {
        match arg {
            Argument::StringLiteral(lit) => {
                values.insert(lit.value.clone());
            }
            Argument::Call(inner) => collect_values_from_call(inner, values),
        }
    }
}
