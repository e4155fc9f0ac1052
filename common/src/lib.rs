use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

/// Flattens every field-level validator message into one `; `-separated string.
///
/// Field order follows `ValidationErrors`, which is a hash map, so callers should not rely on
/// the position of a particular message.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Deserializes a present field into `Some(value)`.
///
/// Paired with `#[serde(default)]` on an `Option<Option<T>>` this tells apart a field that was
/// omitted (`None`), sent as `null` (`Some(None)`), or sent with a value (`Some(Some(v))`).
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Treats blank form inputs as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
