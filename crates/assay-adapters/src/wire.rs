//! Leniency policy for adapter responses.
//!
//! Optional collections (`recommendations`, `concerns`, `redFlags`, ...) and
//! optional booleans (`reviewRequired`, `requiresManualReview`) that are
//! absent **or** `null` map to their empty/`false` default. Wire structs opt
//! in per field with `#[serde(default, deserialize_with = "wire::or_default")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize `T`, mapping an explicit `null` to `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing field also defaults.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
