//! Aatbe source printer.
//!
//! Turns a parsed [`ModuleNode`](aatbe_ir::ast::ModuleNode) back into source
//! text that the parser accepts and that parses to the same tree. Layout is
//! fixed: blocks and struct bodies are broken over indented lines, every
//! `if` branch prints `then`, and the unit return type is omitted.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`context`]: configuration and indentation tracking
//! - [`formatter`]: expressions, types and literals
//! - [`declarations`]: functions, structs and whole modules

pub mod context;
pub mod declarations;
pub mod emitter;
pub mod formatter;

pub use context::{FormatConfig, FormatContext, INDENT_WIDTH};
pub use declarations::{format_module, format_statement, ModuleFormatter};
pub use emitter::{Emitter, StringEmitter};
pub use formatter::{format_expr, Formatter};
