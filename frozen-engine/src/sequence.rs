//! Sequence fields: append and remove by value.

use crate::access::{copy_with, get_field, mismatch, unchanged};
use frozen_model::ValueObject;
use frozen_types::{FieldMut, FieldRef, Result, Shape, Value};
use std::sync::Arc;

fn items<'a, T: ValueObject>(obj: &'a T, field: &str) -> Result<&'a [Value]> {
    match get_field(obj, field)? {
        FieldRef::Sequence(items) => Ok(items),
        other => Err(mismatch::<T>(field, Shape::Sequence, other.shape())),
    }
}

/// Returns a copy with `value` appended to the sequence field.
///
/// Duplicates are appended unless `unique` is set, in which case `obj` itself
/// is returned when an equal value is already present.
pub fn with_field_item<T: ValueObject>(
    obj: &Arc<T>,
    field: &str,
    value: impl Into<Value>,
    unique: bool,
) -> Result<Arc<T>> {
    let value = value.into();

    let current = items(&**obj, field)?;
    if unique && current.contains(&value) {
        return unchanged(obj, field);
    }

    copy_with(&**obj, field, |slot| match slot {
        FieldMut::Sequence(items) => {
            items.push(value);
            Ok(())
        }
        other => Err(mismatch::<T>(field, Shape::Sequence, other.shape())),
    })
}

/// Returns a copy with every item equal to `value` removed from the sequence
/// field, or `obj` itself if there is none. Remaining items keep their order.
pub fn without_field_item<T: ValueObject>(
    obj: &Arc<T>,
    field: &str,
    value: impl Into<Value>,
) -> Result<Arc<T>> {
    let value = value.into();

    if !items(&**obj, field)?.contains(&value) {
        return unchanged(obj, field);
    }

    copy_with(&**obj, field, |slot| match slot {
        FieldMut::Sequence(items) => {
            items.retain(|item| *item != value);
            Ok(())
        }
        other => Err(mismatch::<T>(field, Shape::Sequence, other.shape())),
    })
}
