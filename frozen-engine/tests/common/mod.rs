//! Value types used across the engine tests.

#![allow(dead_code)]

use frozen_engine::{
    Entries, FieldMut, FieldRef, FieldSpec, Result, Schema, Value, ValueObject, With,
};
use std::sync::Arc;

/// A consuming type with one field of each shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    name: Option<Value>,
    colors: Entries,
    tags: Vec<Value>,
}

static PALETTE: Schema = Schema::new(
    "Palette",
    &[
        FieldSpec::scalar("name"),
        FieldSpec::keyed("colors"),
        FieldSpec::sequence("tags"),
    ],
);

impl ValueObject for Palette {
    fn schema() -> &'static Schema {
        &PALETTE
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "name" => Some(FieldRef::Scalar(self.name.as_ref())),
            "colors" => Some(FieldRef::Keyed(&self.colors)),
            "tags" => Some(FieldRef::Sequence(&self.tags)),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "name" => Some(FieldMut::Scalar(&mut self.name)),
            "colors" => Some(FieldMut::Keyed(&mut self.colors)),
            "tags" => Some(FieldMut::Sequence(&mut self.tags)),
            _ => None,
        }
    }
}

impl Palette {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn name(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    pub fn colors(&self) -> &Entries {
        &self.colors
    }

    /// Keys of `colors` in their stored order.
    pub fn color_names(&self) -> Vec<&str> {
        self.colors.keys().map(String::as_str).collect()
    }

    pub fn tags(&self) -> &[Value] {
        &self.tags
    }

    pub fn with_name(self: &Arc<Self>, name: impl Into<Value>) -> Result<Arc<Self>> {
        self.with_field("name", name.into())
    }

    pub fn without_name(self: &Arc<Self>) -> Result<Arc<Self>> {
        self.without_field("name")
    }

    pub fn with_color(self: &Arc<Self>, name: &str, rgb: u32) -> Result<Arc<Self>> {
        self.with_field_entry("colors", name, rgb)
    }

    pub fn without_color(self: &Arc<Self>, name: &str) -> Result<Arc<Self>> {
        self.without_field_entry("colors", name)
    }

    pub fn with_tag(self: &Arc<Self>, tag: &str) -> Result<Arc<Self>> {
        self.with_field_item("tags", tag, false)
    }

    pub fn with_unique_tag(self: &Arc<Self>, tag: &str) -> Result<Arc<Self>> {
        self.with_field_item("tags", tag, true)
    }

    pub fn without_tag(self: &Arc<Self>, tag: &str) -> Result<Arc<Self>> {
        self.without_field_item("tags", tag)
    }

    /// Addresses a field `Palette` never declared.
    pub fn with_bar(self: &Arc<Self>, value: impl Into<Value>) -> Result<Arc<Self>> {
        self.with_field("bar", value.into())
    }
}

/// A type with two scalar fields, used for nested-value equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub address: Option<Value>,
    pub age: Option<Value>,
}

static PROFILE: Schema = Schema::new(
    "Profile",
    &[FieldSpec::scalar("address"), FieldSpec::scalar("age")],
);

impl ValueObject for Profile {
    fn schema() -> &'static Schema {
        &PROFILE
    }

    fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "address" => Some(FieldRef::Scalar(self.address.as_ref())),
            "age" => Some(FieldRef::Scalar(self.age.as_ref())),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "address" => Some(FieldMut::Scalar(&mut self.address)),
            "age" => Some(FieldMut::Scalar(&mut self.age)),
            _ => None,
        }
    }
}

/// `Value` helper for string literals.
pub fn s(text: &str) -> Value {
    Value::from(text)
}
