//! Grammar productions.
//!
//! Each submodule extends [`Parser`](crate::Parser) with the methods for
//! one node family: terminals, types, expressions and declarations.

mod expr;
mod item;
mod terminal;
mod ty;
