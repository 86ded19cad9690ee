//! Record abstraction shared by every log page

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

/// Closed set of filterable fields of one record type.
///
/// Serialized names are the camelCase keys used in persisted presets.
pub trait RecordField:
    Copy + Eq + Ord + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every field, in form/display order
    fn all() -> &'static [Self];

    /// Human readable column label
    fn label(&self) -> &'static str;
}

/// A log record that can be filtered field by field
pub trait Record: Clone + Send + Sync + 'static {
    type Field: RecordField;

    /// Synthetic per-page key, stable for the lifetime of the collection
    fn key(&self) -> &str;

    /// Value of `field`, or `None` when the record does not carry it
    fn field(&self, field: Self::Field) -> Option<Cow<'_, str>>;
}
