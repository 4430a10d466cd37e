//! Schema validation: the only way raw JSON becomes a domain record.
//!
//! Every record derives `Deserialize` with `deny_unknown_fields`, so extra keys,
//! missing keys and mistyped values all fail here. The one widening allowed is
//! the JSON-native one: an integer is accepted where a float is declared. It is
//! stored as `f64`, so it serializes back with a fraction (`65` becomes `65.0`).
//! Nullable fields go through [`nullable`] so that `null` is accepted but an
//! absent key is still an error.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    error::{BatchFailure, FplError},
    Result,
};


/// Post-deserialization checks that serde attributes cannot express.
pub trait Validate {
    /// Human-readable name of the shape, used in `SchemaError` messages.
    const SHAPE: &'static str;

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Convert a raw JSON payload into `T`, failing with `FplError::Schema`.
pub fn parse<T>(raw: Value) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_value(raw).map_err(|e| FplError::schema(T::SHAPE, e.to_string()))?;
    record.validate()?;
    Ok(record)
}

/// Parse the bodies of a batch as `T`, preserving order. `raw[i]` belongs to `ids[i]`.
///
/// Every body that fails validation is reported under its id in
/// `BatchPartialFailure`, so a bad item is never anonymous.
pub fn parse_batch<T, I>(ids: &[I], raw: Vec<Value>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Validate,
    I: Copy + Into<u32>,
{
    let mut records = Vec::with_capacity(raw.len());
    let mut failures = Vec::new();

    for (&id, body) in ids.iter().zip(raw) {
        match parse(body) {
            Ok(record) => records.push(record),
            Err(error) => failures.push(BatchFailure {
                id: id.into(),
                error,
            }),
        }
    }

    if failures.is_empty() {
        Ok(records)
    } else {
        Err(FplError::BatchPartialFailure { failures })
    }
}

/// Required-but-nullable field. Unlike a bare `Option<T>`, a missing key fails.
pub fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
