//! Diagnostics for the aatbe front end.
//!
//! Every phase turns its error values into a [`Diagnostic`]: an
//! [`ErrorCode`], a message, labelled spans and notes. The
//! [`TerminalEmitter`] renders them with line and column numbers.

mod diagnostic;
mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
