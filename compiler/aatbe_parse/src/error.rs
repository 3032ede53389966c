//! Parse errors.
//!
//! Every failure carries one of nine [`ParseErrorKind`]s, a message naming
//! what was expected and what was found, and the span of the failure
//! point. Errors are plain values: alternatives that fail are discarded
//! after the cursor is restored, and only the error that got furthest is
//! reported.

use aatbe_diagnostic::{Diagnostic, ErrorCode};
use aatbe_ir::{Span, Token};
use thiserror::Error;

/// What kind of parse failure occurred.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    /// The lexer could not classify a character.
    InvalidToken,
    /// A token that cannot start any production here.
    UnexpectedToken,
    /// The tokens ran out.
    UnexpectedEof,
    /// A specific keyword, bracket or identifier is missing.
    ExpectedToken,
    ExpectedType,
    /// A literal or identifier is missing.
    ExpectedTerminal,
    /// A separator such as `:` is missing.
    ExpectedSymbol,
    /// A symbol that is not a prefix operator.
    InvalidOperator,
    ExpectedExpression,
}

impl ParseErrorKind {
    pub fn error_code(self) -> ErrorCode {
        match self {
            ParseErrorKind::InvalidToken => ErrorCode::E1001,
            ParseErrorKind::UnexpectedToken => ErrorCode::E1002,
            ParseErrorKind::UnexpectedEof => ErrorCode::E1003,
            ParseErrorKind::ExpectedToken => ErrorCode::E1004,
            ParseErrorKind::ExpectedType => ErrorCode::E1005,
            ParseErrorKind::ExpectedTerminal => ErrorCode::E1006,
            ParseErrorKind::ExpectedSymbol => ErrorCode::E1007,
            ParseErrorKind::InvalidOperator => ErrorCode::E1008,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1009,
        }
    }

    /// Short label for the primary diagnostic span.
    pub fn label(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidToken => "invalid token",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnexpectedEof => "input ends here",
            ParseErrorKind::ExpectedToken => "missing token",
            ParseErrorKind::ExpectedType => "expected a type",
            ParseErrorKind::ExpectedTerminal => "expected a literal or identifier",
            ParseErrorKind::ExpectedSymbol => "missing symbol",
            ParseErrorKind::InvalidOperator => "not a prefix operator",
            ParseErrorKind::ExpectedExpression => "expected an expression",
        }
    }
}

/// Describe a lookahead token for messages.
pub(crate) fn describe(found: Option<&Token>) -> String {
    found.map_or_else(|| "end of file".to_string(), ToString::to_string)
}

/// Parse error with kind, message and location.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
    /// What was being parsed, e.g. `"a struct member"`.
    pub context: Option<&'static str>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// `expected `)`, found symbol `,``
    #[cold]
    pub fn expected_token(expected: &str, found: Option<&Token>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::ExpectedToken,
            format!("expected `{expected}`, found {}", describe(found)),
            span,
        )
    }

    #[cold]
    pub fn expected_identifier(found: Option<&Token>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::ExpectedToken,
            format!("expected identifier, found {}", describe(found)),
            span,
        )
    }

    #[cold]
    pub fn expected_symbol(expected: &str, found: Option<&Token>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::ExpectedSymbol,
            format!("expected `{expected}`, found {}", describe(found)),
            span,
        )
    }

    #[cold]
    pub fn expected_type(found: Option<&Token>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::ExpectedType,
            format!("expected type, found {}", describe(found)),
            span,
        )
    }

    #[cold]
    pub fn unexpected_eof(expected: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            format!("expected {expected}, found end of file"),
            span,
        )
    }

    /// Add what was being parsed. The innermost context is kept.
    #[must_use]
    pub fn with_context(mut self, context: &'static str) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// Pick whichever error got further into the input. Ties keep `self`.
    #[must_use]
    pub fn furthest(self, other: ParseError) -> ParseError {
        if other.span.start > self.span.start {
            other
        } else {
            self
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.error_code())
            .with_message(&self.message)
            .with_label(self.span, self.kind.label());
        match self.context {
            Some(context) => diag.with_note(format!("while parsing {context}")),
            None => diag,
        }
    }
}
