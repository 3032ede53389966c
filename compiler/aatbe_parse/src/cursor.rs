//! Token cursor for navigating the token stream.
//!
//! The stream excludes the lexer's `EndOfFile` token; running out of
//! tokens is the end of input. All lookahead is non-consuming and returns
//! `None` past the end.

use aatbe_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::ParserSnapshot;

/// Cursor over an immutable token slice.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the next unread token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // === Lookahead ===

    #[inline]
    pub fn peek(&self) -> Option<&'a Token> {
        self.peek_at(0)
    }

    /// The token `offset` places after the current one.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos.checked_add(offset)?)
    }

    pub fn peek_is(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, text))
    }

    /// Text-only check; the kind is ignored.
    pub fn peek_text(&self, text: &str) -> bool {
        self.peek_text_at(text, 0)
    }

    pub fn peek_text_at(&self, text: &str, offset: usize) -> bool {
        self.peek_at(offset).is_some_and(|t| t.text == text)
    }

    pub fn peek_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Span of the next token, or a point just past the last token.
    pub fn current_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span,
            None => self.end_span(),
        }
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    fn end_span(&self) -> Span {
        self.tokens.last().map_or(Span::DUMMY, |t| Span::point(t.span.end))
    }

    // === Consumption ===

    /// Consume and return the next token.
    pub fn read(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, token = %token, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Consume the next token only if it has this kind and text.
    pub fn read_if(&mut self, kind: TokenKind, text: &str) -> Option<&'a Token> {
        if self.peek_is(kind, text) {
            self.read()
        } else {
            None
        }
    }

    /// Consume the next token only if its text matches.
    pub fn read_text(&mut self, text: &str) -> Option<&'a Token> {
        if self.peek_text(text) {
            self.read()
        } else {
            None
        }
    }

    // === Snapshots ===

    #[inline]
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.pos)
    }

    #[inline]
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        debug_assert!(snapshot.position() <= self.tokens.len());
        self.pos = snapshot.position();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
