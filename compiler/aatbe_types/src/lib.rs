//! Semantic types for aatbe.
//!
//! A [`TypeSystem`] owns every type descriptor of one compilation unit in
//! an arena and hands out [`TypeId`] handles. Handles are branded with a
//! lifetime unique to their type system, so a handle from one instance
//! cannot be resolved against another:
//!
//! ```compile_fail
//! use aatbe_types::TypeSystem;
//!
//! TypeSystem::scope(|a| {
//!     TypeSystem::scope(|b| {
//!         let id = a.create_bool();
//!         b.get(id);
//!     });
//! });
//! ```
//!
//! [`lower_module`] fills a type system from a parsed module and records
//! the results in the AST's `TypeSlot`s.

mod base;
mod error;
mod idx;
mod lower;
mod struct_type;
mod system;

pub use base::BaseType;
pub use error::TypeError;
pub use idx::TypeId;
pub use lower::{lower_module, lower_type};
pub use struct_type::StructType;
pub use system::TypeSystem;
