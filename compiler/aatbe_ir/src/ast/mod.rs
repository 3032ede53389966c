//! AST node families.
//!
//! Every family is a closed enum, so a node's variant can never disagree
//! with the data it carries. `Display` gives each node its canonical
//! textual form, used in diagnostics and golden tests.

mod expr;
mod item;
mod terminal;
mod ty;

pub use expr::{BinaryOp, Expression, ExpressionKind, IfBranch, UnaryOp};
pub use item::{
    FunctionDecl, MemberBinding, MemberList, ModuleNode, ModuleStatement, ParameterBinding,
    ParameterList, StructDecl, Visibility,
};
pub use terminal::{escape_literal, Terminal};
pub use ty::{FloatWidth, IntWidth, TypeNode};

#[cfg(test)]
mod tests;
