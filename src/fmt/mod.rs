//! Printers for resolved programs
//!
//! Both printers are plain [`Visitor`](crate::ast::Visitor)s over the
//! finished tree:
//!
//! - `source` writes lambda notation that parses back to the same tree;
//! - `functional` writes the node structure, e.g. `Function(Name(x), Name(x))`.

pub mod functional;
pub mod source;

pub use functional::{FunctionalPrinter, to_functional};
pub use source::{SourcePrinter, to_source};
