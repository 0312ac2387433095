//! Guarded field access shared by the primitives.

use frozen_model::{ValueObject, guard};
use frozen_types::{Error, FieldMut, FieldRef, FieldValue, Result, Shape};
use std::sync::Arc;
use tracing::trace;

/// Reads a field by name, after checking it against the schema.
pub fn get_field<'a, T: ValueObject>(obj: &'a T, name: &str) -> Result<FieldRef<'a>> {
    guard::assert_field_exists::<T>(name)?;
    obj.field(name)
        .ok_or_else(|| Error::shape_violation(T::schema().type_name, name))
}

/// Assigns a field by name on an object the caller still owns exclusively.
///
/// This is the construction-time path: once an object is shared behind an
/// `Arc`, only the copy-on-write primitives apply. The assignment goes through
/// [`guard::assert_direct_assignment`], so undeclared fields and mismatched
/// containers are rejected and `obj` is left untouched.
pub fn assign_field<T: ValueObject>(
    obj: &mut T,
    name: &str,
    value: impl Into<FieldValue>,
) -> Result<()> {
    let value = value.into();
    guard::assert_direct_assignment::<T>(name, &value)?;

    let type_name = T::schema().type_name;
    let slot = obj
        .field_mut(name)
        .ok_or_else(|| Error::shape_violation(type_name, name))?;

    match (slot, value) {
        (FieldMut::Scalar(slot), FieldValue::Unset) => *slot = None,
        (FieldMut::Scalar(slot), FieldValue::Scalar(value)) => *slot = Some(value),
        (FieldMut::Keyed(slot), FieldValue::Keyed(entries)) => *slot = entries,
        (FieldMut::Sequence(slot), FieldValue::Sequence(items)) => *slot = items,
        (slot, value) => {
            return Err(Error::type_mismatch(
                type_name,
                name,
                slot.shape(),
                value.shape(),
            ));
        }
    }
    Ok(())
}

pub(crate) fn mismatch<T: ValueObject>(name: &str, expected: Shape, actual: Shape) -> Error {
    Error::type_mismatch(T::schema().type_name, name, expected, actual)
}

/// The no-op path: hands back the very same object.
pub(crate) fn unchanged<T: ValueObject>(obj: &Arc<T>, name: &str) -> Result<Arc<T>> {
    trace!("{}::{} unchanged, keeping original", T::schema().type_name, name);
    Ok(Arc::clone(obj))
}

/// Clones `obj`, applies `update` to the named field of the clone and wraps
/// the clone in a fresh `Arc`. On error the clone is dropped.
pub(crate) fn copy_with<T, F>(obj: &T, name: &str, update: F) -> Result<Arc<T>>
where
    T: ValueObject,
    F: FnOnce(FieldMut<'_>) -> Result<()>,
{
    let mut copy = obj.clone();
    let slot = copy
        .field_mut(name)
        .ok_or_else(|| Error::shape_violation(T::schema().type_name, name))?;
    update(slot)?;

    trace!("{}::{} changed, copied", T::schema().type_name, name);
    Ok(Arc::new(copy))
}
