//! Type parsing.
//!
//! Prefix forms (`&T`, `*T`, `[T]`, `[T; N]`) recurse to the right, so
//! `&&str` is `Ref(Ref(Str))` even though the lexer reads `&&` as one
//! symbol.

use aatbe_ir::ast::{Terminal, TypeNode};
use aatbe_ir::TokenKind;
use aatbe_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, ParseResult, ParseResultExt, Parser};

impl Parser<'_> {
    /// Parse a type.
    pub fn parse_type(&mut self) -> ParseResult<TypeNode> {
        ensure_sufficient_stack(|| self.parse_type_inner())
    }

    fn parse_type_inner(&mut self) -> ParseResult<TypeNode> {
        let Some(token) = self.peek() else {
            return Err(ParseError::expected_type(None, self.current_span()));
        };

        match (token.kind, token.text.as_str()) {
            (TokenKind::Identifier, name) => {
                self.read();
                Ok(TypeNode::primitive(name).unwrap_or_else(|| TypeNode::Typename(name.to_string())))
            }
            (TokenKind::Symbol, "(") if self.peek_is_at(TokenKind::Symbol, ")", 1) => {
                self.read();
                self.read();
                Ok(TypeNode::Unit)
            }
            (TokenKind::Symbol, "[") => {
                self.read();
                self.parse_array_tail().in_context("an array type")
            }
            (TokenKind::Symbol, "&") => {
                self.read();
                Ok(TypeNode::Ref(Box::new(self.parse_type()?)))
            }
            (TokenKind::Symbol, "&&") => {
                self.read();
                let inner = self.parse_type()?;
                Ok(TypeNode::Ref(Box::new(TypeNode::Ref(Box::new(inner)))))
            }
            (TokenKind::Symbol, "*") => {
                self.read();
                Ok(TypeNode::Pointer(Box::new(self.parse_type()?)))
            }
            _ => Err(ParseError::expected_type(Some(token), token.span)),
        }
    }

    /// After `[`: `T]` or `T; N]`.
    fn parse_array_tail(&mut self) -> ParseResult<TypeNode> {
        let element = Box::new(self.parse_type()?);

        let ty = if self.read_if(TokenKind::Symbol, ";").is_some() {
            let size_span = self.current_span();
            match self.parse_terminal()? {
                Terminal::Integer { value, ty } if !(ty.is_signed_integer() && (value as i64) < 0) => {
                    TypeNode::Array(element, value)
                }
                other => {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedTerminal,
                        format!(
                            "array length must be a non-negative integer literal, found {}",
                            other.kind_name().to_lowercase()
                        ),
                        self.span_from(size_span),
                    ));
                }
            }
        } else {
            TypeNode::Slice(element)
        };

        self.expect(TokenKind::Symbol, "]")?;
        Ok(ty)
    }
}
