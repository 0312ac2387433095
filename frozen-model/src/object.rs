use crate::Schema;
use frozen_types::{FieldMut, FieldRef};

/// A type with a fixed set of named fields that the engine can address.
///
/// Implementors keep their data in ordinary struct fields and expose them
/// through `field`/`field_mut`, usually a `match` on the name. Both accessors
/// must resolve exactly the names in [`ValueObject::schema`], with the declared
/// shapes; [`crate::guard::check_conformance`] verifies this in tests.
///
/// `Clone` must produce storage disjoint from the original. This holds for
/// the field containers in `frozen_types`, which own their data.
pub trait ValueObject: Clone {
    /// The type's schema. Identical for every instance.
    fn schema() -> &'static Schema;

    /// Read access to a field by name. `None` for names outside the schema.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Write access to a field by name. `None` for names outside the schema.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}
