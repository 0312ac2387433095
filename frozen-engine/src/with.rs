use frozen_model::ValueObject;
use frozen_types::{Result, Value};
use std::sync::Arc;

/// Method-call form of the six primitives.
///
/// Implemented for `Arc<T>` so a value type's own builder methods can take
/// `self: &Arc<Self>` and delegate in one line.
pub trait With: Sized {
    /// See [`crate::with_field`].
    fn with_field(&self, field: &str, value: impl Into<Option<Value>>) -> Result<Self>;

    /// See [`crate::without_field`].
    fn without_field(&self, field: &str) -> Result<Self>;

    /// See [`crate::with_field_entry`].
    fn with_field_entry(
        &self,
        field: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self>;

    /// See [`crate::without_field_entry`].
    fn without_field_entry(&self, field: &str, key: &str) -> Result<Self>;

    /// See [`crate::with_field_item`].
    fn with_field_item(&self, field: &str, value: impl Into<Value>, unique: bool) -> Result<Self>;

    /// See [`crate::without_field_item`].
    fn without_field_item(&self, field: &str, value: impl Into<Value>) -> Result<Self>;
}

impl<T: ValueObject> With for Arc<T> {
    fn with_field(&self, field: &str, value: impl Into<Option<Value>>) -> Result<Self> {
        crate::with_field(self, field, value)
    }

    fn without_field(&self, field: &str) -> Result<Self> {
        crate::without_field(self, field)
    }

    fn with_field_entry(
        &self,
        field: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        crate::with_field_entry(self, field, key, value)
    }

    fn without_field_entry(&self, field: &str, key: &str) -> Result<Self> {
        crate::without_field_entry(self, field, key)
    }

    fn with_field_item(&self, field: &str, value: impl Into<Value>, unique: bool) -> Result<Self> {
        crate::with_field_item(self, field, value, unique)
    }

    fn without_field_item(&self, field: &str, value: impl Into<Value>) -> Result<Self> {
        crate::without_field_item(self, field, value)
    }
}
