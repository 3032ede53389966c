//! Low-level source access for the aatbe lexer.
//!
//! [`SourceBuffer`] owns the decoded text of one compilation unit and
//! answers offset-based queries without allocating.

mod source_buffer;

pub use source_buffer::{SourceBuffer, SENTINEL};
