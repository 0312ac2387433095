//! Keyed-collection fields: upsert and delete by string key.

use crate::access::{copy_with, get_field, mismatch, unchanged};
use frozen_model::ValueObject;
use frozen_types::{Entries, FieldMut, FieldRef, Result, Shape, Value};
use std::sync::Arc;

fn entries<'a, T: ValueObject>(obj: &'a T, field: &str) -> Result<&'a Entries> {
    match get_field(obj, field)? {
        FieldRef::Keyed(entries) => Ok(entries),
        other => Err(mismatch::<T>(field, Shape::Keyed, other.shape())),
    }
}

/// Returns a copy with `key` set to `value` in the keyed field.
///
/// An existing key keeps its position; a new key goes last. Returns `obj`
/// itself when `key` already maps to an equal value.
pub fn with_field_entry<T: ValueObject>(
    obj: &Arc<T>,
    field: &str,
    key: impl Into<String>,
    value: impl Into<Value>,
) -> Result<Arc<T>> {
    let key = key.into();
    let value = value.into();

    if entries(&**obj, field)?.get(&key) == Some(&value) {
        return unchanged(obj, field);
    }

    copy_with(&**obj, field, |slot| match slot {
        FieldMut::Keyed(entries) => {
            entries.insert(key, value);
            Ok(())
        }
        other => Err(mismatch::<T>(field, Shape::Keyed, other.shape())),
    })
}

/// Returns a copy with `key` removed from the keyed field, or `obj` itself if
/// the key is absent. Remaining keys keep their order.
pub fn without_field_entry<T: ValueObject>(obj: &Arc<T>, field: &str, key: &str) -> Result<Arc<T>> {
    if !entries(&**obj, field)?.contains_key(key) {
        return unchanged(obj, field);
    }

    copy_with(&**obj, field, |slot| match slot {
        FieldMut::Keyed(entries) => {
            entries.shift_remove(key);
            Ok(())
        }
        other => Err(mismatch::<T>(field, Shape::Keyed, other.shape())),
    })
}
