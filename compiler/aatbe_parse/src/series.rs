//! List combinators.
//!
//! `delimited_by` parses `item (sep item)*`; `surrounded_by` wraps a
//! production in an open/close token pair. Together they cover parameter
//! lists, argument tuples and struct bodies.

use aatbe_ir::TokenKind;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Parse `element` repeatedly, requiring `delimiter` between elements.
    ///
    /// The first element that fails ends the list. Nothing it read is
    /// consumed, and neither is the delimiter in front of it, so the
    /// caller sees the tokens that stopped the list.
    pub fn delimited_by<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> ParseResult<T>,
        kind: TokenKind,
        delimiter: &str,
    ) -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        let mut before_delimiter = None;

        loop {
            match self.try_parse(&mut element) {
                Ok(item) => items.push(item),
                Err(_) => {
                    if let Some(snapshot) = before_delimiter {
                        self.restore(snapshot);
                    }
                    return Ok(items);
                }
            }

            before_delimiter = Some(self.snapshot());
            if self.read_if(kind, delimiter).is_none() {
                return Ok(items);
            }
        }
    }

    /// Parse `open inner close`.
    ///
    /// `inner` runs even when `open` is missing; the error then names the
    /// opening token.
    pub fn surrounded_by<T>(
        &mut self,
        inner: impl FnOnce(&mut Self) -> ParseResult<T>,
        open_kind: TokenKind,
        open: &str,
        close_kind: TokenKind,
        close: &str,
    ) -> ParseResult<T> {
        let open_span = self.current_span();
        let open_found = self.peek();
        let opened = self.read_if(open_kind, open).is_some();

        let value = inner(self);
        if !opened {
            return Err(ParseError::expected_token(open, open_found, open_span));
        }
        let value = value?;

        match self.read_if(close_kind, close) {
            Some(_) => Ok(value),
            None => Err(ParseError::expected_token(close, self.peek(), self.current_span())),
        }
    }
}
