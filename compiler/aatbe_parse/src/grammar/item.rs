//! Module-level declarations: functions and structs.

use aatbe_ir::ast::{
    FunctionDecl, MemberBinding, MemberList, ModuleStatement, ParameterBinding, ParameterList,
    StructDecl, TypeNode, Visibility,
};
use aatbe_ir::{TokenKind, TypeSlot};

use crate::error::describe;
use crate::{ParseError, ParseErrorKind, ParseResult, ParseResultExt, Parser};

impl Parser<'_> {
    /// Parse one function or struct declaration.
    pub fn parse_module_statement(&mut self) -> ParseResult<ModuleStatement> {
        let start = self.current_span();

        let function = match self.try_parse(Self::parse_function).wrap_with::<ModuleStatement>() {
            Ok(statement) => return Ok(statement),
            Err(err) => err,
        };
        let structure = match self.try_parse(Self::parse_struct).wrap_with::<ModuleStatement>() {
            Ok(statement) => return Ok(statement),
            Err(err) => err,
        };

        let err = function.furthest(structure);
        if err.span.start > start.start {
            return Err(err);
        }
        Err(ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!("expected `fn`, `extern` or `struct`, found {}", describe(self.peek())),
            start,
        ))
    }

    /// `[extern] fn name [(params [, ...])] [-> type] [= body]`
    pub fn parse_function(&mut self) -> ParseResult<FunctionDecl> {
        let start = self.current_span();
        let is_extern = self.read_if(TokenKind::Keyword, "extern").is_some();
        self.expect(TokenKind::Keyword, "fn")?;
        let name = self.expect_identifier().in_context("a function name")?.text.clone();

        let (params, is_variadic) = if self.peek_is(TokenKind::Symbol, "(")
            && self.peek_is_at(TokenKind::Symbol, ")", 1)
        {
            self.read();
            self.read();
            (ParameterList::default(), false)
        } else if self.peek().is_some() && !self.peek_text("->") && !self.peek_text("=") {
            self.surrounded_by(
                Self::parse_parameters,
                TokenKind::Symbol,
                "(",
                TokenKind::Symbol,
                ")",
            )
            .in_context("a parameter list")?
        } else {
            (ParameterList::default(), false)
        };

        let return_type = if self.read_if(TokenKind::Symbol, "->").is_some() {
            self.parse_type().in_context("a return type")?
        } else {
            TypeNode::Unit
        };

        let body = if self.read_if(TokenKind::Symbol, "=").is_some() {
            Some(self.parse_operation().in_context("a function body")?)
        } else {
            None
        };

        Ok(FunctionDecl {
            is_extern,
            name,
            params,
            return_type,
            body,
            is_variadic,
            span: self.span_from(start),
            ty: TypeSlot::EMPTY,
        })
    }

    /// Parameters inside the parentheses, with an optional `, ...` tail.
    fn parse_parameters(&mut self) -> ParseResult<(ParameterList, bool)> {
        let bindings = self.delimited_by(Self::parse_parameter, TokenKind::Symbol, ",")?;

        let variadic_span = if bindings.is_empty() {
            self.peek().filter(|t| t.is(TokenKind::Symbol, "...")).map(|t| t.span)
        } else if self.peek_is(TokenKind::Symbol, ",") && self.peek_is_at(TokenKind::Symbol, "...", 1) {
            self.read();
            self.read().map(|t| t.span)
        } else {
            None
        };

        match variadic_span {
            Some(span) if bindings.is_empty() => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                "a variadic function needs at least one named parameter",
                span,
            )),
            Some(_) => Ok((ParameterList::new(bindings), true)),
            None => Ok((ParameterList::new(bindings), false)),
        }
    }

    /// `name : type`
    pub fn parse_parameter(&mut self) -> ParseResult<ParameterBinding> {
        let start = self.current_span();
        let name = self.expect_identifier()?.text.clone();
        self.expect_symbol(":").in_context("a parameter")?;
        let ty = self.parse_type().in_context("a parameter type")?;
        Ok(ParameterBinding::new(name, ty, self.span_from(start)))
    }

    /// `struct Name { member (; member)* }`
    pub fn parse_struct(&mut self) -> ParseResult<StructDecl> {
        let start = self.current_span();
        self.expect(TokenKind::Keyword, "struct")?;
        let name = self.expect_identifier().in_context("a struct name")?.text.clone();

        let members = self
            .surrounded_by(
                |p| p.delimited_by(Self::parse_member, TokenKind::Symbol, ";"),
                TokenKind::Symbol,
                "{",
                TokenKind::Symbol,
                "}",
            )
            .in_context("a struct body")?;

        Ok(StructDecl {
            name,
            members: MemberList::new(members),
            span: self.span_from(start),
            ty: TypeSlot::EMPTY,
        })
    }

    /// `[public] name : type`
    pub fn parse_member(&mut self) -> ParseResult<MemberBinding> {
        let start = self.current_span();
        let visibility = if self.read_if(TokenKind::Keyword, "public").is_some() {
            Visibility::Public
        } else {
            Visibility::Internal
        };
        let name = self.expect_identifier()?.text.clone();
        self.expect_symbol(":").in_context("a struct member")?;
        let ty = self.parse_type().in_context("a member type")?;
        Ok(MemberBinding::new(name, ty, visibility, self.span_from(start)))
    }
}
