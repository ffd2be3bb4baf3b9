//! The tokenizer's dispatch loop and sub-scanners.
//!
//! A single pass walks the source character by character. Each iteration
//! classifies the current character into exactly one branch, the branch
//! consumes a maximal run, and the run becomes one token. Because
//! whitespace, comments, and unrecognized characters are all emitted as
//! tokens, every character of the input lands in exactly one token and the
//! stream concatenates back to the original source.

use crate::char_classes::*;
use crate::token::{Token, TokenKind};

/// The scanner converts source text into a flat token sequence.
///
/// Single-use: construct with [`Scanner::new`], then call
/// [`Scanner::tokenize`] once. Taking `self` by value there makes reuse a
/// compile error rather than a runtime surprise.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// 1-based line of the character at `pos`.
    line: u32,
    /// 1-based column of the character at `pos`.
    column: u32,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            text: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Drain the entire input and return the token sequence.
    ///
    /// Never fails: unterminated strings/comments/regex truncate at end of
    /// input and unrecognized characters become `Unknown` tokens.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current_char() {
            let token = if ch.is_whitespace() {
                self.scan_whitespace()
            } else if is_word_start(ch) {
                self.scan_word()
            } else if is_digit(ch) {
                self.scan_number()
            } else if is_quote(ch) {
                self.scan_string(ch)
            } else if ch == '/' && matches!(self.char_at(1), Some('/') | Some('*')) {
                self.scan_comment()
            } else if ch == '/' && self.regex_likely() {
                self.scan_regex()
            } else if is_operator(ch) {
                self.scan_operator()
            } else if is_punctuation(ch) {
                self.scan_punctuation()
            } else {
                self.scan_unknown()
            };
            tokens.push(token);
        }

        tokens
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Consume the current character, updating line and column.
    ///
    /// Every sub-scanner consumes through this single method, so position
    /// bookkeeping is identical for all token kinds, newlines inside
    /// strings and comments included.
    #[inline]
    fn bump(&mut self) -> char {
        let ch = self.text[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    // ========================================================================
    // Sub-scanners, one per token category
    // ========================================================================

    /// Maximal run of whitespace characters, newlines included.
    fn scan_whitespace(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        while self.current_char().is_some_and(char::is_whitespace) {
            text.push(self.bump());
        }
        Token::new(TokenKind::Whitespace, text, line, column)
    }

    /// Maximal run of letters, digits, and underscores, classified against
    /// the keyword and literal tables.
    fn scan_word(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        while self.current_char().is_some_and(is_word_part) {
            text.push(self.bump());
        }
        let kind = TokenKind::classify_word(&text);
        Token::new(kind, text, line, column)
    }

    /// Maximal run of decimal digits. No sign, decimal point, exponent, or
    /// base prefix: `3.14` lexes as Number, Punctuation, Number.
    fn scan_number(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        while self.current_char().is_some_and(is_digit) {
            text.push(self.bump());
        }
        Token::new(TokenKind::Number, text, line, column)
    }

    /// String or template literal, delimited by the opening quote character.
    ///
    /// Consumes verbatim until the matching quote or end of input; no
    /// escape handling, so a backslash-escaped quote still terminates the
    /// token. An unterminated literal truncates silently.
    fn scan_string(&mut self, quote: char) -> Token {
        let (line, column) = (self.line, self.column);
        let kind = if quote == '`' {
            TokenKind::TemplateString
        } else {
            TokenKind::String
        };
        let mut text = String::new();
        text.push(self.bump());
        while let Some(ch) = self.current_char() {
            text.push(self.bump());
            if ch == quote {
                break;
            }
        }
        Token::new(kind, text, line, column)
    }

    /// `//` comment up to (excluding) the next newline, or `/* */` comment
    /// including the closing delimiter. Either truncates at end of input.
    fn scan_comment(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        if self.char_at(1) == Some('/') {
            while !self.is_eof() && self.current_char() != Some('\n') {
                text.push(self.bump());
            }
        } else {
            text.push(self.bump());
            text.push(self.bump());
            while !self.is_eof() {
                if self.current_char() == Some('*') && self.char_at(1) == Some('/') {
                    text.push(self.bump());
                    text.push(self.bump());
                    break;
                }
                text.push(self.bump());
            }
        }
        Token::new(TokenKind::Comment, text, line, column)
    }

    /// Decide whether a `/` starts a regex literal rather than an operator.
    ///
    /// Looks ahead past whitespace; another `/` or an operator character
    /// there means division. This is a purely syntactic guess with known
    /// false positives (`1 / 2` scans as a regex); the correct rule would
    /// track whether the preceding token ends an expression.
    fn regex_likely(&self) -> bool {
        let mut i = self.pos + 1;
        while i < self.text.len() && self.text[i].is_whitespace() {
            i += 1;
        }
        match self.text.get(i) {
            Some('/') => false,
            Some(&ch) if is_operator(ch) => false,
            _ => true,
        }
    }

    /// `/body/flags` regex literal. Same no-escape caveat as strings; the
    /// flags are a maximal trailing run of letters.
    fn scan_regex(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        text.push(self.bump());
        while !self.is_eof() && self.current_char() != Some('/') {
            text.push(self.bump());
        }
        if !self.is_eof() {
            text.push(self.bump());
        }
        while self.current_char().is_some_and(char::is_alphabetic) {
            text.push(self.bump());
        }
        Token::new(TokenKind::RegExp, text, line, column)
    }

    /// Maximal run of operator-set characters, merged into one token even
    /// when the result is not a real JavaScript operator (`=-` is one
    /// Operator token). Intentional simplification.
    fn scan_operator(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        while self.current_char().is_some_and(is_operator) {
            text.push(self.bump());
        }
        Token::new(TokenKind::Operator, text, line, column)
    }

    /// Single punctuation character; punctuation never merges into runs.
    fn scan_punctuation(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let text = self.bump().to_string();
        Token::new(TokenKind::Punctuation, text, line, column)
    }

    /// Single character matching no other rule.
    fn scan_unknown(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let text = self.bump().to_string();
        Token::new(TokenKind::Unknown, text, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(Scanner::new("").tokenize().is_empty());
    }

    #[test]
    fn test_single_tokens() {
        assert_eq!(kinds("x"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("42"), vec![TokenKind::Number]);
        assert_eq!(kinds(";"), vec![TokenKind::Punctuation]);
        assert_eq!(kinds("+"), vec![TokenKind::Operator]);
        assert_eq!(kinds("#"), vec![TokenKind::Unknown]);
        assert_eq!(kinds(" \t\n "), vec![TokenKind::Whitespace]);
    }

    #[test]
    fn test_operator_run_merges() {
        let tokens = Scanner::new("x=-1").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, "=-");
    }

    #[test]
    fn test_number_has_no_decimal_point() {
        let tokens = Scanner::new("3.14").tokenize();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["3", ".", "14"]);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].kind, TokenKind::Number);
    }

    #[test]
    fn test_template_string() {
        let tokens = Scanner::new("`a${x}`").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::TemplateString);
        assert_eq!(tokens[0].text, "`a${x}`");
    }

    #[test]
    fn test_escaped_quote_terminates_early() {
        // No escape handling: the second quote closes the string.
        let tokens = Scanner::new(r#""a\"b""#).tokenize();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, r#""a\""#);
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        let tokens = Scanner::new("// hi\nx").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "// hi");
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = Scanner::new("/* open").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "/* open");
    }

    #[test]
    fn test_regex_with_flags() {
        let tokens = Scanner::new("/abc*/gi").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::RegExp);
        assert_eq!(tokens[0].text, "/abc*/gi");
    }

    #[test]
    fn test_slash_at_eof_assumed_regex() {
        // Lookahead runs off the end, so the heuristic says regex.
        let tokens = Scanner::new("a/").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::RegExp);
        assert_eq!(tokens[1].text, "/");
    }

    #[test]
    fn test_newline_in_string_advances_line() {
        let tokens = Scanner::new("\"a\nb\" x").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "\"a\nb\"");
        // `x` sits on line 2, column 4 (after `b\" `).
        let x = &tokens[2];
        assert_eq!((x.line, x.column), (2, 4));
    }
}
