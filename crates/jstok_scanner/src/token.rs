//! Token records produced by the scanner.

use std::fmt;

/// The closed set of token categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A reserved word (`if`, `function`, `return`, ...).
    Keyword,
    /// Any other letter/digit/underscore run.
    Identifier,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// `undefined`.
    Undefined,
    /// A run of decimal digits.
    Number,
    /// A `"..."` or `'...'` literal, quotes included.
    String,
    /// A `` `...` `` literal, backticks included.
    TemplateString,
    /// A `//` or `/* */` comment, delimiters included.
    Comment,
    /// A maximal run of operator characters.
    Operator,
    /// A single punctuation character.
    Punctuation,
    /// A `/pattern/flags` literal, slashes and flags included.
    RegExp,
    /// A maximal run of whitespace, newlines included.
    Whitespace,
    /// A single character matching no other rule.
    Unknown,
}

impl TokenKind {
    /// Classify a scanned word run against the keyword and literal tables.
    pub fn classify_word(text: &str) -> TokenKind {
        if is_keyword(text) {
            TokenKind::Keyword
        } else {
            match text {
                "true" | "false" => TokenKind::Boolean,
                "null" => TokenKind::Null,
                "undefined" => TokenKind::Undefined,
                _ => TokenKind::Identifier,
            }
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
            TokenKind::Undefined => "Undefined",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::TemplateString => "TemplateString",
            TokenKind::Comment => "Comment",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::RegExp => "RegExp",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Membership test for the reserved-word table. Exact-string, case-sensitive.
fn is_keyword(text: &str) -> bool {
    matches!(
        text,
        "if" | "else"
            | "while"
            | "for"
            | "function"
            | "return"
            | "var"
            | "let"
            | "const"
            | "new"
            | "this"
            | "super"
            | "class"
            | "extends"
            | "static"
            | "import"
            | "export"
            | "default"
            | "from"
            | "as"
            | "try"
            | "catch"
            | "finally"
            | "throw"
            | "switch"
            | "case"
            | "break"
            | "continue"
            | "debugger"
            | "instanceof"
            | "typeof"
            | "void"
            | "with"
            | "yield"
            | "await"
    )
}

/// A classified, positioned span of source text.
///
/// `text` is the exact substring the token covers, delimiters included for
/// quoted, commented, and regex kinds. `line` and `column` are the 1-based
/// position of the token's first character.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The raw matched span of source text.
    pub text: String,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}
