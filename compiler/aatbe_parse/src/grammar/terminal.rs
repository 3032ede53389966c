//! Literal and identifier parsing.

use aatbe_ir::ast::{Expression, Terminal, TypeNode};
use aatbe_ir::TokenKind;

use crate::error::describe;
use crate::{ParseError, ParseErrorKind, ParseResult, Parser};

impl Parser<'_> {
    /// Parse a literal, an identifier or `()`.
    pub fn parse_terminal(&mut self) -> ParseResult<Terminal> {
        let Some(token) = self.peek() else {
            return Err(ParseError::unexpected_eof("literal or identifier", self.current_span()));
        };

        let terminal = match token.kind {
            TokenKind::Number => {
                self.read();
                let ty = self.parse_integer_suffix();
                Terminal::Integer {
                    value: token.value,
                    ty,
                }
            }
            TokenKind::Boolean => {
                self.read();
                Terminal::Boolean(token.value != 0)
            }
            TokenKind::Char => {
                let Some(c) = token.text.chars().next() else {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidToken,
                        "empty character token",
                        token.span,
                    ));
                };
                self.read();
                Terminal::Character(c)
            }
            TokenKind::String => {
                self.read();
                Terminal::String(token.text.clone())
            }
            TokenKind::Identifier => {
                self.read();
                Terminal::Identifier(token.text.clone())
            }
            TokenKind::Symbol if token.text == "(" && self.peek_is_at(TokenKind::Symbol, ")", 1) => {
                self.read();
                self.read();
                Terminal::Unit
            }
            TokenKind::Unexpected => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidToken,
                    format!("unrecognized character `{}`", token.text),
                    token.span,
                ));
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedTerminal,
                    format!("expected literal or identifier, found {}", describe(Some(token))),
                    token.span,
                ));
            }
        };
        Ok(terminal)
    }

    /// A terminal as an expression node.
    pub(crate) fn parse_atom(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        let terminal = self.parse_terminal()?;
        Ok(Expression::atom(terminal, self.span_from(start)))
    }

    /// `int8`..`uint64` written directly after the digits, as in `10uint8`.
    fn parse_integer_suffix(&mut self) -> TypeNode {
        let digits_end = self.previous_span().end;
        let suffix = self
            .peek()
            .filter(|t| t.kind == TokenKind::Identifier && t.span.start == digits_end)
            .and_then(|t| TypeNode::primitive(&t.text))
            .filter(TypeNode::is_integer);

        match suffix {
            Some(ty) => {
                self.read();
                ty
            }
            None => TypeNode::DEFAULT_INTEGER,
        }
    }

    pub(crate) fn peek_is_at(&self, kind: TokenKind, text: &str, offset: usize) -> bool {
        self.peek_at(offset).is_some_and(|t| t.is(kind, text))
    }
}
