//! Owned source text with sentinel-based character lookup.
//!
//! Reads past the end of the text return the `0x00` sentinel instead of
//! failing, so the scanner can peek ahead without bounds checks at every
//! call site. The lexer still decides end-of-input by offset, so a literal
//! NUL in the source is not mistaken for the end.

use aatbe_ir::Span;

/// Sentinel returned for out-of-range lookups.
pub const SENTINEL: char = '\0';

/// Immutable source text of one compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        SourceBuffer { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The character starting at byte `offset`.
    ///
    /// Returns [`SENTINEL`] when `offset` is past the end or falls inside a
    /// multi-byte character.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        self.text
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(SENTINEL)
    }

    /// Whether `literal` occurs starting exactly at byte `offset`.
    #[inline]
    pub fn contains(&self, offset: usize, literal: &str) -> bool {
        self.as_bytes()
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(literal.as_bytes()))
    }

    /// Source text covered by `span`, or `""` if the span is out of range.
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.to_range()).unwrap_or("")
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        SourceBuffer::new(text)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        SourceBuffer { text }
    }
}
