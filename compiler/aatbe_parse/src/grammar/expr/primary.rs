//! Primary expressions.

use aatbe_ir::ast::{Expression, ExpressionKind, IfBranch, Terminal, UnaryOp};
use aatbe_ir::TokenKind;

use crate::{ParseError, ParseErrorKind, ParseResult, ParseResultExt, Parser};

impl Parser<'_> {
    /// `op operand` where `op` is one of `! - ~ & *`.
    pub(super) fn parse_unary(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        let op = self
            .peek()
            .filter(|t| t.kind == TokenKind::Symbol)
            .and_then(|t| UnaryOp::from_symbol(&t.text));
        let Some(op) = op else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidOperator,
                "expected prefix operator",
                start,
            ));
        };
        self.read();

        let operand = self.parse_prefix()?;
        Ok(Expression::new(
            ExpressionKind::Unary {
                op,
                operand: Box::new(operand),
            },
            self.span_from(start),
        ))
    }

    /// `()`
    pub(super) fn parse_unit_atom(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        self.expect(TokenKind::Symbol, "(")?;
        self.expect(TokenKind::Symbol, ")")?;
        Ok(Expression::atom(Terminal::Unit, self.span_from(start)))
    }

    /// `( expr (, expr)* )`. A single parenthesized expression is a
    /// one-element tuple.
    pub(super) fn parse_tuple(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        if !self.peek_is(TokenKind::Symbol, "(") {
            return Err(ParseError::expected_token("(", self.peek(), start));
        }
        let elements = self
            .surrounded_by(
                |p| p.delimited_by(Self::parse_operation, TokenKind::Symbol, ","),
                TokenKind::Symbol,
                "(",
                TokenKind::Symbol,
                ")",
            )
            .in_context("a tuple")?;
        Ok(Expression::new(ExpressionKind::Tuple(elements), self.span_from(start)))
    }

    /// `{ expr [;] expr [;] ... }`
    pub(super) fn parse_block(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        self.expect(TokenKind::Symbol, "{")?;

        let mut statements = Vec::new();
        loop {
            if self.read_if(TokenKind::Symbol, "}").is_some() {
                break;
            }
            if self.is_at_end() {
                return Err(ParseError::expected_token("}", None, self.current_span()).with_context("a block"));
            }
            statements.push(self.parse_expression().in_context("a block")?);
            self.read_if(TokenKind::Symbol, ";");
        }

        Ok(Expression::new(ExpressionKind::Block(statements), self.span_from(start)))
    }

    /// `if c [then] b (else if c [then] b)* [else b]`
    pub(super) fn parse_if(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        self.expect(TokenKind::Keyword, "if")?;

        let mut branches = Vec::new();
        loop {
            let cond = self.parse_expression().in_context("an if condition")?;
            self.read_if(TokenKind::Keyword, "then");
            let body = self.parse_expression().in_context("an if branch")?;
            branches.push(IfBranch {
                cond: Some(cond),
                body,
            });

            if self.read_if(TokenKind::Keyword, "else").is_none() {
                break;
            }
            if self.read_if(TokenKind::Keyword, "if").is_none() {
                let body = self.parse_expression().in_context("an else branch")?;
                branches.push(IfBranch { cond: None, body });
                break;
            }
        }

        Ok(Expression::new(ExpressionKind::If(branches), self.span_from(start)))
    }

    /// `loop body`
    pub(super) fn parse_loop(&mut self) -> ParseResult<Expression> {
        let start = self.current_span();
        self.expect(TokenKind::Keyword, "loop")?;
        let body = self.parse_expression().in_context("a loop body")?;
        Ok(Expression::new(ExpressionKind::Loop(Box::new(body)), self.span_from(start)))
    }
}
