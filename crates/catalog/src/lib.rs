//! Product catalog for the routine builder.
//!
//! A static, validated, read-only list of products. No IO: the built-in
//! catalog is compiled in and anything else is handed over as values.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductId};
