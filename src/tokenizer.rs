//! # Tokenizer
//!
//! Converts a raw character sequence from a JSON document into a linear
//! token stream terminated by an end-of-input marker.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::tokenize;
pub use token::Token;
