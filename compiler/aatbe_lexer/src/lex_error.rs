//! Lexer errors.

use aatbe_diagnostic::{Diagnostic, ErrorCode};
use aatbe_ir::Span;
use thiserror::Error;

/// A lexical error and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What went wrong while scanning a token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Missing closing `'`.
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// `''`.
    #[error("empty character literal")]
    EmptyChar,
    /// Unknown escape, including `\'`.
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    /// `0x` with no digits.
    #[error("malformed number literal")]
    InvalidNumber,
    #[error("number literal does not fit in 64 bits")]
    NumberOverflow,
}

impl LexErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedChar => ErrorCode::E0002,
            LexErrorKind::EmptyChar => ErrorCode::E0003,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0004,
            LexErrorKind::InvalidNumber => ErrorCode::E0005,
            LexErrorKind::NumberOverflow => ErrorCode::E0006,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// Convert to a diagnostic pointing at the offending literal.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.to_string());

        match &self.kind {
            LexErrorKind::InvalidEscape('\'') => {
                diag.with_note("a single quote cannot be escaped")
            }
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("valid escapes are `\\\\`, `\\n`, `\\t`, `\\r` and `\\\"`")
            }
            LexErrorKind::NumberOverflow => diag.with_note("the largest literal is 0xFFFF_FFFF_FFFF_FFFF"),
            _ => diag,
        }
    }
}
