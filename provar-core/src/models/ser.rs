//! Serialization helpers for the output contract.
//!
//! Absent values are carried as `Option` internally and only become the
//! `-` sentinel at the JSON boundary, so a genuine `-` in source data
//! would remain distinguishable from a missing field.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// 1-based sites are serialized as strings, matching the site-keyed tables.
pub fn site_as_string<S: Serializer>(site: &usize, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&site.to_string())
}

/// `None` becomes the `-` sentinel.
pub fn str_or_dash<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(text) => serializer.serialize_str(text),
        None => serializer.serialize_str("-"),
    }
}

/// `None` becomes the `-` sentinel; present frequencies stay numeric.
pub fn f64_or_dash<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(number) => serializer.serialize_f64(*number),
        None => serializer.serialize_str("-"),
    }
}

/// `None` becomes an empty JSON object.
pub fn map_or_empty<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
