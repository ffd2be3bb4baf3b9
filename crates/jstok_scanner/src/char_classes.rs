//! Character classification used by the scanner's dispatch loop.

/// The characters that form operator runs. A maximal run of these merges
/// into a single Operator token.
pub const OPERATORS: &str = "+-*/%=!&|<>^~?:";

/// The single-character punctuation set. Punctuation never merges into runs.
pub const PUNCTUATION: &str = ".,;(){}[]";

/// Check if a character starts an identifier, keyword, or word-shaped literal.
#[inline]
pub fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Check if a character continues a word run.
#[inline]
pub fn is_word_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character opens a string or template literal.
#[inline]
pub fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\'' || ch == '`'
}

/// Check if a character belongs to the operator set.
#[inline]
pub fn is_operator(ch: char) -> bool {
    OPERATORS.contains(ch)
}

/// Check if a character belongs to the punctuation set.
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}
