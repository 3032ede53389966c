//! Type lowering errors.

use aatbe_diagnostic::{Diagnostic, ErrorCode};
use aatbe_ir::Span;
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum TypeError {
    #[error("unknown type `{name}`")]
    UnknownType { name: String, span: Span },

    #[error("struct `{name}` is defined more than once")]
    DuplicateStruct { name: String, span: Span, first: Span },

    #[error("struct `{struct_name}` has more than one member named `{member}`")]
    DuplicateMember {
        struct_name: String,
        member: String,
        span: Span,
        first: Span,
    },

    #[error("cannot add field `{field}` to non-struct type `{ty}`")]
    NotAStruct { field: String, ty: String },
}

impl TypeError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            TypeError::UnknownType { .. } => ErrorCode::E2001,
            TypeError::DuplicateStruct { .. } => ErrorCode::E2002,
            TypeError::DuplicateMember { .. } => ErrorCode::E2003,
            TypeError::NotAStruct { .. } => ErrorCode::E2004,
        }
    }

    /// Where the error was detected, if it came from source.
    pub fn span(&self) -> Option<Span> {
        match self {
            TypeError::UnknownType { span, .. }
            | TypeError::DuplicateStruct { span, .. }
            | TypeError::DuplicateMember { span, .. } => Some(*span),
            TypeError::NotAStruct { .. } => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.error_code()).with_message(self.to_string());
        match self {
            TypeError::UnknownType { span, .. } => diag
                .with_label(*span, "not a builtin type or a struct in this module"),
            TypeError::DuplicateStruct { span, first, .. } => diag
                .with_label(*span, "redefined here")
                .with_secondary_label(*first, "first defined here"),
            TypeError::DuplicateMember { span, first, .. } => diag
                .with_label(*span, "duplicate member")
                .with_secondary_label(*first, "first declared here"),
            TypeError::NotAStruct { .. } => diag,
        }
    }
}
