//! Backtracking recursive descent parser for aatbe.
//!
//! Consumes the lexer's tokens (without `EndOfFile`) and produces a
//! [`ModuleNode`]. Productions are methods on [`Parser`] that either
//! succeed or fail with a [`ParseError`]; alternatives are tried under
//! [`Parser::try_parse`], which rewinds the cursor on failure.
//!
//! Module parsing recovers at statement boundaries, so one malformed
//! declaration does not hide errors in the rest of the file.

mod cursor;
mod error;
mod grammar;
mod outcome;
mod recovery;
mod series;
mod snapshot;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use outcome::{ParseResult, ParseResultExt};
pub use snapshot::ParserSnapshot;

use aatbe_ir::ast::{Expression, ModuleNode, Terminal, TypeNode};
use aatbe_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

/// Parser state: a cursor over the token slice.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    // Cursor delegation.

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    pub fn peek(&self) -> Option<&'a Token> {
        self.cursor.peek()
    }

    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.cursor.peek_at(offset)
    }

    #[inline]
    pub fn peek_is(&self, kind: TokenKind, text: &str) -> bool {
        self.cursor.peek_is(kind, text)
    }

    #[inline]
    pub fn peek_text(&self, text: &str) -> bool {
        self.cursor.peek_text(text)
    }

    #[inline]
    pub fn peek_text_at(&self, text: &str, offset: usize) -> bool {
        self.cursor.peek_text_at(text, offset)
    }

    #[inline]
    pub fn peek_kind(&self, kind: TokenKind) -> bool {
        self.cursor.peek_kind(kind)
    }

    #[inline]
    pub fn read(&mut self) -> Option<&'a Token> {
        self.cursor.read()
    }

    #[inline]
    pub fn read_if(&mut self, kind: TokenKind, text: &str) -> Option<&'a Token> {
        self.cursor.read_if(kind, text)
    }

    #[inline]
    pub fn read_text(&mut self, text: &str) -> Option<&'a Token> {
        self.cursor.read_text(text)
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    // Speculation.

    #[inline]
    pub fn snapshot(&self) -> ParserSnapshot {
        self.cursor.snapshot()
    }

    #[inline]
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.restore(snapshot);
    }

    /// Run `f`; on failure rewind to where it started.
    pub fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if let Err(err) = &result {
            trace!(
                from = self.cursor.position(),
                to = snapshot.position(),
                error = %err,
                "backtrack"
            );
            self.restore(snapshot);
        }
        result
    }

    // Required tokens.

    /// Consume a token of this kind and text or fail with `ExpectedToken`.
    fn expect(&mut self, kind: TokenKind, text: &str) -> ParseResult<&'a Token> {
        match self.read_if(kind, text) {
            Some(token) => Ok(token),
            None => Err(ParseError::expected_token(text, self.peek(), self.current_span())),
        }
    }

    /// Like [`Self::expect`] for separators, failing with `ExpectedSymbol`.
    fn expect_symbol(&mut self, text: &str) -> ParseResult<&'a Token> {
        match self.read_if(TokenKind::Symbol, text) {
            Some(token) => Ok(token),
            None => Err(ParseError::expected_symbol(text, self.peek(), self.current_span())),
        }
    }

    fn expect_identifier(&mut self) -> ParseResult<&'a Token> {
        if self.peek_kind(TokenKind::Identifier) {
            if let Some(token) = self.read() {
                return Ok(token);
            }
        }
        Err(ParseError::expected_identifier(self.peek(), self.current_span()))
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    // Entry points.

    /// Parse declarations until the tokens run out, recovering after errors.
    pub fn parse_module(&mut self) -> ParseOutput {
        let mut module = ModuleNode::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            match self.parse_module_statement() {
                Ok(statement) => module.push(statement),
                Err(err) => {
                    debug!(error = %err, span = %err.span, "statement failed, recovering");
                    errors.push(err);
                    self.synchronize();
                }
            }
        }

        ParseOutput { module, errors }
    }

    /// Run `f` and require that it consumed every token.
    fn parse_complete<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let value = f(self)?;
        match self.peek() {
            None => Ok(value),
            Some(token) => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                format!("unexpected {token} after the end of the input"),
                token.span,
            )),
        }
    }
}

/// A parsed module plus every statement-level error.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ParseOutput {
    pub module: ModuleNode,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The module when parsing was clean, otherwise every error.
    pub fn into_result(self) -> Result<ModuleNode, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.module)
        } else {
            Err(self.errors)
        }
    }
}

/// Parse tokens into a module.
pub fn parse_module(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse_module()
}

/// Parse tokens that form exactly one expression, binary operators included.
pub fn parse_expression(tokens: &[Token]) -> ParseResult<Expression> {
    Parser::new(tokens).parse_complete(Parser::parse_operation)
}

/// Parse tokens that form exactly one type.
pub fn parse_type(tokens: &[Token]) -> ParseResult<TypeNode> {
    Parser::new(tokens).parse_complete(Parser::parse_type)
}

/// Parse tokens that form exactly one literal or identifier.
pub fn parse_terminal(tokens: &[Token]) -> ParseResult<Terminal> {
    Parser::new(tokens).parse_complete(Parser::parse_terminal)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
