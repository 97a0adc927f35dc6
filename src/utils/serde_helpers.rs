use serde::{ Deserialize, Deserializer, Serializer };
use std::str::FromStr;
use tracing::Level;

/// Serialize `tracing::Level` as its lowercase name
pub fn serialize_level<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    serializer.serialize_str(&level.as_str().to_lowercase())
}

/// Deserialize `tracing::Level` from a case-insensitive name
pub fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where D: Deserializer<'de>
{
    let raw = String::deserialize(deserializer)?;
    Level::from_str(raw.trim()).map_err(|_| {
        serde::de::Error::custom(
            format!("unknown log level: {} (expected trace, debug, info, warn or error)", raw)
        )
    })
}
