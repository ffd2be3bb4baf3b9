//! jstok_scanner: Lossless tokenizer for JavaScript-like source text.
//!
//! Converts a source string into a flat, ordered sequence of tokens with
//! 1-based line/column positions. Whitespace and comments are tokens too,
//! so concatenating every token's text reproduces the input exactly.
//!
//! The scanner is total: malformed input (unterminated strings, comments,
//! regex literals, stray characters) degrades to truncated or `Unknown`
//! tokens rather than an error, so [`tokenize`] has no failure path.
//!
//! This is deliberately not a spec-accurate ECMAScript lexer. Numbers are
//! bare digit runs, strings have no escape handling, consecutive operator
//! characters merge into a single token, and regex-vs-division is decided
//! by lookahead rather than parse context. Each simplification is
//! documented on the sub-scanner that implements it.

mod char_classes;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Tokenize source text in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}
