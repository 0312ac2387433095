use frozen_types::Shape;
use serde::Serialize;

/// Describes a value type's fixed field set.
///
/// Built in a `static` with the `const` constructors, so the field list is
/// known at compile time and shared by every instance of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub type_name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    #[must_use]
    pub const fn new(type_name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { type_name, fields }
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Declared shape of a field, if the field exists.
    #[must_use]
    pub fn shape_of(&self, name: &str) -> Option<Shape> {
        self.get(name).map(|spec| spec.shape)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|spec| spec.name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: Shape,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, shape: Shape) -> Self {
        Self { name, shape }
    }

    /// Shorthand for a single-value field that may be unset.
    #[must_use]
    pub const fn scalar(name: &'static str) -> Self {
        Self::new(name, Shape::Scalar)
    }

    /// Shorthand for a string-keyed map field.
    #[must_use]
    pub const fn keyed(name: &'static str) -> Self {
        Self::new(name, Shape::Keyed)
    }

    /// Shorthand for an ordered list field.
    #[must_use]
    pub const fn sequence(name: &'static str) -> Self {
        Self::new(name, Shape::Sequence)
    }
}
