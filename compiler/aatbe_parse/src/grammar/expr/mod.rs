//! Expression parsing.
//!
//! - `mod.rs`: entry points and the binary precedence layer
//! - `primary.rs`: unary, unit, tuple, block, `if` and `loop`
//! - `postfix.rs`: calls and member access
//!
//! Adjacent expressions are separate: `{ a *b }` is two statements and
//! `if ready *p else 0` has the body `*p`. Binary operators are therefore
//! only read where the grammar would otherwise require a closing token:
//! tuple elements, call arguments, function bodies and complete inputs.

mod postfix;
mod primary;

use aatbe_ir::ast::{BinaryOp, Expression, ExpressionKind};
use aatbe_ir::TokenKind;
use aatbe_stack::ensure_sufficient_stack;

use crate::error::describe;
use crate::{ParseError, ParseErrorKind, ParseResult, Parser};

type Production<'a> = fn(&mut Parser<'a>) -> ParseResult<Expression>;

impl<'a> Parser<'a> {
    /// Parse an expression: a primary followed by its postfix operators.
    ///
    /// Block statements, `if` conditions and bodies, loop bodies and unary
    /// operands are parsed this way, so a following `*` or `-` starts the
    /// next expression instead of continuing this one.
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_prefix()
    }

    /// Parse an expression that may contain binary operators.
    pub fn parse_operation(&mut self) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| self.parse_binary(0))
    }

    /// Precedence climbing over postfix expressions.
    ///
    /// Operators at `min_precedence` or tighter are folded into the left
    /// operand; the right operand only takes strictly tighter operators,
    /// which makes every level left associative.
    fn parse_binary(&mut self, min_precedence: u8) -> ParseResult<Expression> {
        let mut left = self.parse_prefix()?;

        while let Some(op) = self.peek_binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.read();
            let right = self.parse_binary(precedence + 1)?;
            let span = left.span().merge(right.span());
            left = Expression::new(
                ExpressionKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn peek_binary_op(&self) -> Option<BinaryOp> {
        self.peek()
            .filter(|t| t.kind == TokenKind::Symbol)
            .and_then(|t| BinaryOp::from_symbol(&t.text))
    }

    /// A primary expression followed by its postfix operators.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| {
            let primary = self.parse_primary()?;
            self.parse_postfix(primary)
        })
    }

    /// Try each primary form in turn and report the error that got furthest.
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        let alternatives: [Production<'a>; 7] = [
            Self::parse_unary,
            Self::parse_unit_atom,
            Self::parse_tuple,
            Self::parse_block,
            Self::parse_if,
            Self::parse_loop,
            Self::parse_atom,
        ];

        let mut best: Option<ParseError> = None;
        for alternative in alternatives {
            match self.try_parse(alternative) {
                Ok(expr) => return Ok(expr),
                Err(err) => {
                    best = Some(match best {
                        Some(prev) => prev.furthest(err),
                        None => err,
                    });
                }
            }
        }

        match best {
            Some(err) if err.span.start > start.start => Err(err),
            _ => Err(self.expression_start_error()),
        }
    }

    /// Error for a token that cannot begin any expression.
    fn expression_start_error(&self) -> ParseError {
        let Some(token) = self.peek() else {
            return ParseError::unexpected_eof("expression", self.current_span());
        };

        match token.kind {
            TokenKind::Unexpected => ParseError::new(
                ParseErrorKind::InvalidToken,
                format!("unrecognized character `{}`", token.text),
                token.span,
            ),
            TokenKind::Symbol if !is_punctuation(&token.text) => ParseError::new(
                ParseErrorKind::InvalidOperator,
                format!("`{}` is not a prefix operator", token.text),
                token.span,
            ),
            _ => ParseError::new(
                ParseErrorKind::ExpectedExpression,
                format!("expected expression, found {}", describe(Some(token))),
                token.span,
            ),
        }
    }
}

/// Brackets and separators, which end an expression rather than start one.
fn is_punctuation(symbol: &str) -> bool {
    matches!(symbol, "(" | ")" | "{" | "}" | "[" | "]" | "," | ";")
}
