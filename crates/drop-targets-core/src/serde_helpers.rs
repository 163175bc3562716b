//! Serde adapters for JSON's lack of NaN / infinity.

use serde::{Deserialize, Deserializer, Serializer};

/// Default value for coordinates absent from the input.
pub fn nan() -> f64 {
    f64::NAN
}

/// Deserialize an `f64` that may be `null`; `null` becomes NaN.
///
/// Pair with `#[serde(default = "nan")]` so absent fields become NaN too.
pub fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Deserialize a value that may be `null`; `null` becomes `T::default()`.
pub fn default_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `f64` fields whose non-finite values travel as `null` and come back as
/// `+∞`. Used for "prediction unavailable" sentinels.
pub mod infinite_as_null {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
