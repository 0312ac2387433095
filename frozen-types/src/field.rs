//! Borrowed and owned views over a single field.
//!
//! A value object hands out a [`FieldRef`] when the engine reads a field and a
//! [`FieldMut`] when the engine writes into a freshly cloned copy. The variant
//! reflects the container the field actually stores, which is what shape
//! checks are made against.

use crate::Shape;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage for a keyed-collection field. Keeps insertion order.
pub type Entries = IndexMap<String, Value>;

/// Read-only view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    /// `None` when the scalar is unset.
    Scalar(Option<&'a Value>),
    Keyed(&'a Entries),
    Sequence(&'a [Value]),
}

impl<'a> FieldRef<'a> {
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Keyed(_) => Shape::Keyed,
            Self::Sequence(_) => Shape::Sequence,
        }
    }

    /// Returns the scalar value, or `None` if unset or not a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&'a Value> {
        match *self {
            Self::Scalar(value) => value,
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entries(&self) -> Option<&'a Entries> {
        match *self {
            Self::Keyed(entries) => Some(entries),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_items(&self) -> Option<&'a [Value]> {
        match *self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Clones the borrowed data into an owned [`FieldValue`].
    #[must_use]
    pub fn to_owned_value(&self) -> FieldValue {
        match *self {
            Self::Scalar(None) => FieldValue::Unset,
            Self::Scalar(Some(value)) => FieldValue::Scalar(value.clone()),
            Self::Keyed(entries) => FieldValue::Keyed(entries.clone()),
            Self::Sequence(items) => FieldValue::Sequence(items.to_vec()),
        }
    }
}

/// Mutable view of a field's storage.
///
/// Only ever obtained on an object the caller exclusively owns.
#[derive(Debug)]
pub enum FieldMut<'a> {
    Scalar(&'a mut Option<Value>),
    Keyed(&'a mut Entries),
    Sequence(&'a mut Vec<Value>),
}

impl FieldMut<'_> {
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Keyed(_) => Shape::Keyed,
            Self::Sequence(_) => Shape::Sequence,
        }
    }
}

/// An owned field value, used for direct assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// An unset scalar.
    Unset,
    Scalar(Value),
    Keyed(Entries),
    Sequence(Vec<Value>),
}

impl FieldValue {
    /// The shape this value fits. An unset value fits a scalar field.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Unset | Self::Scalar(_) => Shape::Scalar,
            Self::Keyed(_) => Shape::Keyed,
            Self::Sequence(_) => Shape::Sequence,
        }
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Option<Value>> for FieldValue {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Self::Scalar(value),
            None => Self::Unset,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<Entries> for FieldValue {
    fn from(entries: Entries) -> Self {
        Self::Keyed(entries)
    }
}

impl From<Vec<Value>> for FieldValue {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}
