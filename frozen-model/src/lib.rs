//! Schema model for frozen value objects.
//!
//! Defines the contract between a value type and the mutation engine:
//! - [`ValueObject`] — accessor table a type implements to expose its fields by name
//! - [`Schema`] — the fixed, `static` list of a type's fields and their shapes
//! - [`FieldSpec`] — one declared field
//! - [`guard`] — the shape guard that rejects fields outside the schema
//!
//! Consuming types declare their schema once and never grow or shrink it.

pub mod guard;
mod object;
mod schema;

pub use object::ValueObject;
pub use schema::{FieldSpec, Schema};
