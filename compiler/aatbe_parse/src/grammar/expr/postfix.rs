//! Postfix operators: calls and member access.

use aatbe_ir::ast::{Expression, ExpressionKind};
use aatbe_ir::TokenKind;

use crate::{ParseResult, ParseResultExt, Parser};

impl Parser<'_> {
    /// Apply `(args)` and `.member` to `expr` until neither follows.
    ///
    /// A `.` that is not followed by an identifier is left in place.
    pub(super) fn parse_postfix(&mut self, mut expr: Expression) -> ParseResult<Expression> {
        loop {
            if self.peek_is(TokenKind::Symbol, "(") {
                let args = self.parse_call_args().in_context("call arguments")?;
                let span = expr.span().merge(self.previous_span());
                expr = Expression::new(
                    ExpressionKind::Call {
                        callee: Box::new(expr),
                        args,
                    },
                    span,
                );
            } else if self.peek_is(TokenKind::Symbol, ".")
                && self.peek_at(1).is_some_and(|t| t.kind == TokenKind::Identifier)
            {
                self.read();
                let member = self.expect_identifier().in_context("a member access")?.text.clone();
                let span = expr.span().merge(self.previous_span());
                expr = Expression::new(
                    ExpressionKind::Accessor {
                        object: Box::new(expr),
                        member,
                    },
                    span,
                );
            } else {
                return Ok(expr);
            }
        }
    }

    /// `()` or `( expr (, expr)* )`.
    fn parse_call_args(&mut self) -> ParseResult<Vec<Expression>> {
        if self.peek_is_at(TokenKind::Symbol, ")", 1) {
            self.read();
            self.read();
            return Ok(Vec::new());
        }
        self.surrounded_by(
            |p| p.delimited_by(Self::parse_operation, TokenKind::Symbol, ","),
            TokenKind::Symbol,
            "(",
            TokenKind::Symbol,
            ")",
        )
    }
}
