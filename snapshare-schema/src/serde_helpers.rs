use serde::{Deserialize, Deserializer};

/// Distinguishes an absent patch field from an explicit `null`.
///
/// Use with `#[serde(default)]`: a missing key stays `None`, `null` becomes
/// `Some(None)`, and a value becomes `Some(Some(v))`.
pub(crate) fn nullable_patch<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
