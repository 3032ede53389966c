//! Expression nodes.
//!
//! An [`Expression`] pairs an immutable [`ExpressionKind`] with its source
//! span and an empty [`TypeSlot`]. Children are boxed and owned by their
//! parent, so the AST is always a tree.

use std::fmt;

use super::Terminal;
use crate::{Span, TypeSlot};

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`
    Negation,
    /// `!`
    LogicalNot,
    /// `~`
    BitwiseNot,
    /// `&`
    AddressOf,
    /// `*`
    Dereference,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(UnaryOp::Negation),
            "!" => Some(UnaryOp::LogicalNot),
            "~" => Some(UnaryOp::BitwiseNot),
            "&" => Some(UnaryOp::AddressOf),
            "*" => Some(UnaryOp::Dereference),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negation => "-",
            UnaryOp::LogicalNot => "!",
            UnaryOp::BitwiseNot => "~",
            UnaryOp::AddressOf => "&",
            UnaryOp::Dereference => "*",
        }
    }
}

/// Infix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseLeftShift,
    BitwiseRightShift,
    LogicalAnd,
    LogicalOr,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => BinaryOp::Addition,
            "-" => BinaryOp::Subtraction,
            "*" => BinaryOp::Multiplication,
            "/" => BinaryOp::Division,
            "%" => BinaryOp::Modulo,
            "&" => BinaryOp::BitwiseAnd,
            "|" => BinaryOp::BitwiseOr,
            "^" => BinaryOp::BitwiseXor,
            "<<" => BinaryOp::BitwiseLeftShift,
            ">>" => BinaryOp::BitwiseRightShift,
            "&&" => BinaryOp::LogicalAnd,
            "||" => BinaryOp::LogicalOr,
            "==" => BinaryOp::Equal,
            "!=" => BinaryOp::NotEqual,
            "<" => BinaryOp::LessThan,
            "<=" => BinaryOp::LessThanOrEqual,
            ">" => BinaryOp::GreaterThan,
            ">=" => BinaryOp::GreaterThanOrEqual,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Addition => "+",
            BinaryOp::Subtraction => "-",
            BinaryOp::Multiplication => "*",
            BinaryOp::Division => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::BitwiseXor => "^",
            BinaryOp::BitwiseLeftShift => "<<",
            BinaryOp::BitwiseRightShift => ">>",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
        }
    }

    /// Binding strength. Higher binds tighter; all levels are left associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::LogicalOr => 1,
            BinaryOp::LogicalAnd => 2,
            BinaryOp::BitwiseOr => 3,
            BinaryOp::BitwiseXor => 4,
            BinaryOp::BitwiseAnd => 5,
            BinaryOp::Equal | BinaryOp::NotEqual => 6,
            BinaryOp::LessThan
            | BinaryOp::LessThanOrEqual
            | BinaryOp::GreaterThan
            | BinaryOp::GreaterThanOrEqual => 7,
            BinaryOp::BitwiseLeftShift | BinaryOp::BitwiseRightShift => 8,
            BinaryOp::Addition | BinaryOp::Subtraction => 9,
            BinaryOp::Multiplication | BinaryOp::Division | BinaryOp::Modulo => 10,
        }
    }
}

/// One arm of an `if` chain. Only the last arm may lack a condition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfBranch {
    pub cond: Option<Expression>,
    pub body: Expression,
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExpressionKind {
    Atom(Terminal),
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Tuple(Vec<Expression>),
    /// `callee(args...)`; the argument tuple may be empty.
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
    },
    Block(Vec<Expression>),
    If(Vec<IfBranch>),
    Loop(Box<Expression>),
    /// `object.member`
    Accessor {
        object: Box<Expression>,
        member: String,
    },
}

/// An expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expression {
    kind: ExpressionKind,
    span: Span,
    ty: TypeSlot,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Expression {
            kind,
            span,
            ty: TypeSlot::EMPTY,
        }
    }

    pub fn atom(terminal: Terminal, span: Span) -> Self {
        Self::new(ExpressionKind::Atom(terminal), span)
    }

    #[inline]
    pub fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn ty(&self) -> TypeSlot {
        self.ty
    }

    #[inline]
    pub fn ty_mut(&mut self) -> &mut TypeSlot {
        &mut self.ty
    }

    pub fn into_kind(self) -> ExpressionKind {
        self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ExpressionKind::Atom(_) => "Atom",
            ExpressionKind::Unary { .. } => "Unary",
            ExpressionKind::Binary { .. } => "Binary",
            ExpressionKind::Tuple(_) => "Tuple",
            ExpressionKind::Call { .. } => "Call",
            ExpressionKind::Block(_) => "Block",
            ExpressionKind::If(_) => "If",
            ExpressionKind::Loop(_) => "Loop",
            ExpressionKind::Accessor { .. } => "Accessor",
        }
    }

    pub fn as_atom(&self) -> Option<&Terminal> {
        match &self.kind {
            ExpressionKind::Atom(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Expression]> {
        match &self.kind {
            ExpressionKind::Tuple(elements) => Some(elements),
            _ => None,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expression], sep: &str) -> fmt::Result {
    for item in items {
        write!(f, "{item}{sep}")?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Atom(t) => write!(f, "{t}"),
            ExpressionKind::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
            ExpressionKind::Binary { op, left, right } => {
                write!(f, "{left} {} {right}", op.symbol())
            }
            ExpressionKind::Tuple(elements) => {
                f.write_str("(")?;
                write_list(f, elements, ", ")?;
                f.write_str(")")
            }
            ExpressionKind::Call { callee, args } => {
                write!(f, "{callee}((")?;
                write_list(f, args, ", ")?;
                f.write_str("))")
            }
            ExpressionKind::Block(statements) => {
                f.write_str("{")?;
                write_list(f, statements, "; ")?;
                f.write_str("}")
            }
            ExpressionKind::If(branches) => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" else ")?;
                    }
                    match &branch.cond {
                        Some(cond) => write!(f, "if {cond} {}", branch.body)?,
                        None => write!(f, "{}", branch.body)?,
                    }
                }
                Ok(())
            }
            ExpressionKind::Loop(body) => write!(f, "loop {body}"),
            ExpressionKind::Accessor { object, member } => write!(f, "{object}.{member}"),
        }
    }
}
