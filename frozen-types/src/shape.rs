//! Field shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of container a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// A single value that may be unset.
    Scalar,
    /// A mapping from string key to value, in insertion order.
    Keyed,
    /// An ordered list of values; duplicates allowed.
    Sequence,
}

impl Shape {
    /// Human readable name, used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Keyed => "keyed collection",
            Self::Sequence => "sequence",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
