//! Aatbe IR - shared front-end data structures
//!
//! - [`Span`] for source locations
//! - [`Token`] and [`TokenKind`] for lexer output
//! - [`ast`] node families produced by the parser
//! - [`TypeSlot`] for attaching resolved semantic types to nodes

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;
mod type_slot;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use type_slot::{SlotEntry, TypeSlot};
