//! Copy-on-write mutation engine for frozen value objects.
//!
//! Every operation takes a shared object (`&Arc<T>`) and returns either:
//! - the **same** `Arc` when the requested change would leave the object equal
//!   to what it already is, or
//! - a **new** `Arc` holding a clone of the object with exactly one field (or
//!   one entry of a collection field) changed.
//!
//! The original is never modified. Equality is structural, so two values built
//! independently still short-circuit into a no-op.
//!
//! Six primitives cover the three field shapes:
//!
//! | Shape     | Set / add                         | Unset / remove                    |
//! |-----------|-----------------------------------|-----------------------------------|
//! | scalar    | [`with_field`]                    | [`without_field`]                 |
//! | keyed     | [`with_field_entry`]              | [`without_field_entry`]           |
//! | sequence  | [`with_field_item`]               | [`without_field_item`]            |
//!
//! Consuming types usually wrap these in named methods through the [`With`]
//! extension trait:
//!
//! ```ignore
//! impl Palette {
//!     pub fn with_color(self: &Arc<Self>, name: &str, rgb: u32) -> Result<Arc<Self>> {
//!         self.with_field_entry("colors", name, rgb)
//!     }
//! }
//! ```
//!
//! Addressing a field outside the schema fails with [`Error::ShapeViolation`];
//! using a collection operation on the wrong kind of field fails with
//! [`Error::TypeMismatch`]. Both are programming errors.

mod access;
mod keyed;
mod scalar;
mod sequence;
mod with;

pub use access::{assign_field, get_field};
pub use keyed::{with_field_entry, without_field_entry};
pub use scalar::{with_field, without_field};
pub use sequence::{with_field_item, without_field_item};
pub use with::With;

pub use frozen_model::{FieldSpec, Schema, ValueObject, guard};
pub use frozen_types::{Entries, Error, FieldMut, FieldRef, FieldValue, Result, Shape, Value};
