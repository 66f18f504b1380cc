/*!
# Grammar Validator

Consumes the token sequence produced by the tokenizer and confirms it is
exactly one well-formed JSON value followed by end of input. The document
itself is never materialized: validation is a pure accept/reject decision
over the grammar, and all payload values are discarded once their
syntactic shape is confirmed.

```text
value   := object | array | STRING | NUMBER | TRUE | FALSE | NULL
object  := '{' '}' | '{' member (',' member)* '}'
member  := STRING ':' value
array   := '[' ']' | '[' value (',' value)* ']'
```

## Examples

```rust
use jsonvet::{tokenizer, validator};

let tokens = tokenizer::tokenize(r#"{"a": [1, 2, 3], "b": null}"#).unwrap();
assert!(validator::validate(tokens).is_ok());
```

Rejections carry a [`SyntaxError`] describing the first grammar violation:

```rust
use jsonvet::error::SyntaxError;
use jsonvet::{tokenizer, validator};

let tokens = tokenizer::tokenize(r#"{"a": 1,}"#).unwrap();
assert!(matches!(
    validator::validate(tokens),
    Err(SyntaxError::UnexpectedToken { .. })
));
```

## See Also

- [`tokenize`](crate::tokenizer::tokenize): produces the input sequence.
- [`SyntaxError`]: the error type for failed validations.
*/

use crate::error::SyntaxError;
use crate::tokenizer::Token;

/// Read position into a token sequence, with one-token lookahead.
///
/// Owns the sequence for the duration of one validation run; the position
/// is monotonically non-decreasing and never moves past the terminal
/// [`Token::EndOfInput`].
struct Cursor {
    tokens: Vec<Token>,
    position: usize,
}

impl Cursor {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Inspect the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Consume the current token. The terminal [`Token::EndOfInput`] is
    /// never consumed past.
    fn advance(&mut self) {
        if !matches!(self.tokens[self.position], Token::EndOfInput) {
            self.position += 1;
        }
    }

    /// Dispatches on the peeked token to the matching grammar rule.
    fn parse_value(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::Str(_)
            | Token::Number(_)
            | Token::True
            | Token::False
            | Token::Null => {
                self.advance();
                Ok(())
            }
            other => Err(unexpected(other, "a value")),
        }
    }

    /// `object := '{' '}' | '{' member (',' member)* '}'` with
    /// `member := STRING ':' value`.
    ///
    /// A comma immediately followed by `'}'` (trailing comma) fails the
    /// next iteration's string-key check.
    fn parse_object(&mut self) -> Result<(), SyntaxError> {
        self.advance(); // '{', dispatched on by the caller

        if matches!(self.peek(), Token::RightBrace) {
            self.advance();
            return Ok(());
        }

        loop {
            match self.peek() {
                Token::Str(_) => self.advance(),
                other => return Err(unexpected(other, "a string key")),
            }
            match self.peek() {
                Token::Colon => self.advance(),
                other => return Err(unexpected(other, "':'")),
            }
            self.parse_value()?;
            match self.peek() {
                Token::RightBrace => {
                    self.advance();
                    return Ok(());
                }
                Token::Comma => self.advance(),
                other => return Err(unexpected(other, "',' or '}'")),
            }
        }
    }

    /// `array := '[' ']' | '[' value (',' value)* ']'`, with the same
    /// trailing-comma rejection as objects.
    fn parse_array(&mut self) -> Result<(), SyntaxError> {
        self.advance(); // '[', dispatched on by the caller

        if matches!(self.peek(), Token::RightBracket) {
            self.advance();
            return Ok(());
        }

        loop {
            self.parse_value()?;
            match self.peek() {
                Token::RightBracket => {
                    self.advance();
                    return Ok(());
                }
                Token::Comma => self.advance(),
                other => return Err(unexpected(other, "',' or ']'")),
            }
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        expected,
        found: token.description(),
    }
}

/// Validate that `tokens` form exactly one well-formed JSON value followed
/// immediately by end of input.
///
/// # Errors
///
/// Returns a [`SyntaxError`] describing the first grammar violation;
/// trailing tokens after a complete top-level value fail with
/// [`SyntaxError::TrailingContent`].
///
/// # Panics
///
/// Panics if `tokens` does not terminate in [`Token::EndOfInput`], which
/// [`tokenize`](crate::tokenizer::tokenize) guarantees.
pub fn validate(tokens: Vec<Token>) -> Result<(), SyntaxError> {
    let mut cursor = Cursor::new(tokens);
    cursor.parse_value()?;
    match cursor.peek() {
        Token::EndOfInput => Ok(()),
        trailing => Err(SyntaxError::TrailingContent(trailing.description())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn check(input: &str) -> Result<(), SyntaxError> {
        validate(tokenize(input)?)
    }

    #[test]
    fn accepts_nested_document() {
        assert!(check(r#"{"a": [1, 2, 3], "b": null}"#).is_ok());
    }

    #[test]
    fn accepts_empty_containers() {
        assert!(check("{}").is_ok());
        assert!(check("[]").is_ok());
        assert!(check("[{}, {}, []]").is_ok());
    }

    #[test]
    fn accepts_bare_scalars() {
        for input in ["42", "\"x\"", "true", "false", "null", "-3.5e+2"] {
            assert!(check(input).is_ok(), "input: {input}");
        }
    }

    #[test]
    fn accepts_deep_nesting() {
        assert!(check("[[[[[[[[[[42]]]]]]]]]]").is_ok());
        assert!(check(r#"{"a": {"b": {"c": {"d": []}}}}"#).is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            check(""),
            Err(SyntaxError::UnexpectedToken {
                expected: "a value",
                found: "end of input",
            })
        );
    }

    #[test]
    fn rejects_trailing_comma_in_object() {
        // The comma hands the loop back to the string-key check, which
        // sees '}' instead.
        assert_eq!(
            check(r#"{"a": 1,}"#),
            Err(SyntaxError::UnexpectedToken {
                expected: "a string key",
                found: "'}'",
            })
        );
    }

    #[test]
    fn rejects_trailing_comma_in_array() {
        assert_eq!(
            check("[1, 2,]"),
            Err(SyntaxError::UnexpectedToken {
                expected: "a value",
                found: "']'",
            })
        );
    }

    #[test]
    fn rejects_unclosed_array() {
        assert_eq!(
            check("[1, 2"),
            Err(SyntaxError::UnexpectedToken {
                expected: "',' or ']'",
                found: "end of input",
            })
        );
    }

    #[test]
    fn rejects_unclosed_object() {
        assert_eq!(
            check(r#"{"a": 1"#),
            Err(SyntaxError::UnexpectedToken {
                expected: "',' or '}'",
                found: "end of input",
            })
        );
    }

    #[test]
    fn rejects_unbalanced_closers() {
        assert!(matches!(
            check("}"),
            Err(SyntaxError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            check("[1, 2]]"),
            Err(SyntaxError::TrailingContent(_))
        ));
    }

    #[test]
    fn rejects_missing_colon() {
        assert_eq!(
            check(r#"{"a" 1}"#),
            Err(SyntaxError::UnexpectedToken {
                expected: "':'",
                found: "number",
            })
        );
    }

    #[test]
    fn rejects_non_string_key() {
        assert_eq!(
            check("{1: 2}"),
            Err(SyntaxError::UnexpectedToken {
                expected: "a string key",
                found: "number",
            })
        );
    }

    #[test]
    fn rejects_comma_where_value_expected() {
        assert_eq!(
            check("[,]"),
            Err(SyntaxError::UnexpectedToken {
                expected: "a value",
                found: "','",
            })
        );
    }

    #[test]
    fn rejects_trailing_content() {
        assert_eq!(
            check("123 456"),
            Err(SyntaxError::TrailingContent("number"))
        );
        assert_eq!(check("{}{}"), Err(SyntaxError::TrailingContent("'{'")));
        // `truefalse` lexes as two keyword tokens; the first parses as the
        // top-level value and the second is left over.
        assert_eq!(
            check("truefalse"),
            Err(SyntaxError::TrailingContent("'false'"))
        );
    }

    #[test]
    fn lexical_errors_propagate() {
        assert_eq!(
            check("\"unterminated"),
            Err(SyntaxError::UnterminatedString)
        );
        assert_eq!(check("[tru]"), Err(SyntaxError::InvalidLiteral("true")));
    }

    #[test]
    fn verdict_is_stable() {
        for input in [r#"{"a": [1, 2, 3], "b": null}"#, "[1, 2,]", ""] {
            assert_eq!(check(input), check(input), "input: {input}");
        }
    }
}
