/*!
# `jsonvet` Library

Strict JSON syntax validation without building a document tree, plus a
small `wc`-style text counting utility.

Validation runs in two stages consumed strictly in sequence: the
[`tokenizer`] turns the raw input into a linear token stream, and the
[`validator`] consumes that stream with one-token lookahead against the
JSON value grammar. The first violation terminates validation with a
[`SyntaxError`](error::SyntaxError).
*/

pub mod count;
pub mod error;
pub mod tokenizer;
pub mod validator;

use error::SyntaxError;

/// Validate that `input` is a syntactically well-formed JSON document.
///
/// # Errors
///
/// Returns the first lexical or grammatical [`SyntaxError`] in the input.
///
/// # Examples
///
/// ```rust
/// assert!(jsonvet::validate_str("[1, 2, 3]").is_ok());
/// assert!(jsonvet::validate_str("[1, 2,]").is_err());
/// ```
pub fn validate_str(input: &str) -> Result<(), SyntaxError> {
    let tokens = tokenizer::tokenize(input)?;
    validator::validate(tokens)
}
