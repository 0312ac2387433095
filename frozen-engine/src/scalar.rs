//! Scalar fields: set and unset.

use crate::access::{copy_with, get_field, mismatch, unchanged};
use frozen_model::ValueObject;
use frozen_types::{FieldMut, FieldRef, Result, Shape, Value};
use std::sync::Arc;

/// Returns a copy with `field` set to `value`.
///
/// `None` is the unset sentinel: passing it unsets the field. Returns `obj`
/// itself when the field already holds an equal value, or is already unset and
/// `value` is `None`.
pub fn with_field<T: ValueObject>(
    obj: &Arc<T>,
    field: &str,
    value: impl Into<Option<Value>>,
) -> Result<Arc<T>> {
    let value = value.into();
    let current = match get_field(&**obj, field)? {
        FieldRef::Scalar(current) => current,
        other => return Err(mismatch::<T>(field, Shape::Scalar, other.shape())),
    };

    if current == value.as_ref() {
        return unchanged(obj, field);
    }

    copy_with(&**obj, field, |slot| match slot {
        FieldMut::Scalar(slot) => {
            *slot = value;
            Ok(())
        }
        other => Err(mismatch::<T>(field, Shape::Scalar, other.shape())),
    })
}

/// Returns a copy with `field` unset, or `obj` itself if it already is.
pub fn without_field<T: ValueObject>(obj: &Arc<T>, field: &str) -> Result<Arc<T>> {
    match get_field(&**obj, field)? {
        FieldRef::Scalar(None) => return unchanged(obj, field),
        FieldRef::Scalar(Some(_)) => {}
        other => return Err(mismatch::<T>(field, Shape::Scalar, other.shape())),
    }

    copy_with(&**obj, field, |slot| match slot {
        FieldMut::Scalar(slot) => {
            *slot = None;
            Ok(())
        }
        other => Err(mismatch::<T>(field, Shape::Scalar, other.shape())),
    })
}
