//! `skintilla-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering concerns).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::{Money, ValueObject};
