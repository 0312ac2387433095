//! Shape guard.
//!
//! Rejects any attempt to address a field that is not part of a type's
//! schema, and any direct assignment that would put the wrong kind of
//! container into a declared field. Stateless; failures are returned, never
//! recovered from.

use crate::{FieldSpec, ValueObject};
use frozen_types::{Error, FieldValue, Result};
use std::collections::HashSet;
use tracing::warn;

/// Fails with [`Error::ShapeViolation`] unless `field` is declared by `T`.
pub fn assert_field_exists<T: ValueObject>(field: &str) -> Result<&'static FieldSpec> {
    let schema = T::schema();
    schema.get(field).ok_or_else(|| {
        warn!("Rejected unknown field {:?} on {}", field, schema.type_name);
        Error::shape_violation(schema.type_name, field)
    })
}

/// Checks a direct, by-name assignment of `value` to `field`.
///
/// An undeclared field is always a [`Error::ShapeViolation`], whatever the
/// value. A declared field only accepts a value of its declared shape.
pub fn assert_direct_assignment<T: ValueObject>(field: &str, value: &FieldValue) -> Result<()> {
    let spec = assert_field_exists::<T>(field)?;
    if spec.shape != value.shape() {
        let type_name = T::schema().type_name;
        warn!(
            "Rejected assignment of a {} to {}::{}",
            value.shape(),
            type_name,
            field
        );
        return Err(Error::type_mismatch(type_name, field, spec.shape, value.shape()));
    }
    Ok(())
}

/// Verifies that `obj`'s accessors agree with its schema.
///
/// Every declared field must resolve through [`ValueObject::field`] with the
/// declared shape, and no name may be declared twice.
pub fn check_conformance<T: ValueObject>(obj: &T) -> Result<()> {
    let schema = T::schema();
    let mut seen = HashSet::with_capacity(schema.len());

    for spec in schema.fields {
        if !seen.insert(spec.name) {
            warn!("{} declares field {:?} twice", schema.type_name, spec.name);
            return Err(Error::shape_violation(schema.type_name, spec.name));
        }

        let Some(current) = obj.field(spec.name) else {
            warn!(
                "{} declares field {:?} but does not expose it",
                schema.type_name, spec.name
            );
            return Err(Error::shape_violation(schema.type_name, spec.name));
        };

        if current.shape() != spec.shape {
            return Err(Error::type_mismatch(
                schema.type_name,
                spec.name,
                spec.shape,
                current.shape(),
            ));
        }
    }

    Ok(())
}
