//! Tokens produced by the lexer.

use std::fmt;

use crate::Span;

/// Token classification.
///
/// The lexer does not distinguish individual keywords or symbols by kind;
/// the literal text carries that information.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    EndOfFile,
    Number,
    Unexpected,
    Boolean,
    Char,
    String,
    Identifier,
    Keyword,
    Symbol,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "end of file",
            TokenKind::Number => "number",
            TokenKind::Unexpected => "unexpected character",
            TokenKind::Boolean => "boolean",
            TokenKind::Char => "character",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexed token.
///
/// `text` holds the decoded text: raw digits for numbers, the unescaped
/// contents for strings and characters, the matched literal otherwise.
/// `value` holds the numeric payload (number value, boolean as 0/1,
/// character code point) and is 0 when meaningless.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub value: u64,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, value: u64, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            value,
            span,
        }
    }

    /// Numeric payload reinterpreted as a two's complement integer.
    #[inline]
    pub fn signed_value(&self) -> i64 {
        self.value as i64
    }

    /// Check both kind and literal text.
    #[inline]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{} {:?}", self.kind, self.text),
            TokenKind::EndOfFile => f.write_str(self.kind.display_name()),
            _ => write!(f, "{} `{}`", self.kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests;
