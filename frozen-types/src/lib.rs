//! Core type definitions for frozen value objects.
//!
//! This crate defines the plain data shared by the schema layer and the
//! mutation engine:
//! - [`Shape`] of a field (scalar, keyed collection, sequence)
//! - Borrowed and owned field views ([`FieldRef`], [`FieldMut`], [`FieldValue`])
//! - The [`Error`] raised when a caller addresses a field the wrong way
//!
//! Field data is carried as [`serde_json::Value`], so equality between two
//! values is always structural.

mod field;
mod shape;

pub use field::{Entries, FieldMut, FieldRef, FieldValue};
pub use serde_json::Value;
pub use shape::Shape;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while addressing a field of a value object.
///
/// Both variants indicate a defect in the calling code. Neither is retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The field identifier is not part of the type's schema.
    #[error("{type_name} has no field \"{field}\"")]
    ShapeViolation {
        type_name: &'static str,
        field: String,
    },

    /// The field exists but holds a different kind of container.
    #[error("{type_name}::{field} is not a {expected} (found {actual})")]
    TypeMismatch {
        type_name: &'static str,
        field: String,
        expected: Shape,
        actual: Shape,
    },
}

impl Error {
    pub fn shape_violation(type_name: &'static str, field: impl Into<String>) -> Self {
        Self::ShapeViolation {
            type_name,
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        type_name: &'static str,
        field: impl Into<String>,
        expected: Shape,
        actual: Shape,
    ) -> Self {
        Self::TypeMismatch {
            type_name,
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Returns true for [`Error::ShapeViolation`].
    #[must_use]
    pub fn is_shape_violation(&self) -> bool {
        matches!(self, Self::ShapeViolation { .. })
    }

    /// Returns true for [`Error::TypeMismatch`].
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// The field identifier the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::ShapeViolation { field, .. } | Self::TypeMismatch { field, .. } => field,
        }
    }
}
