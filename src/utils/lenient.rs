//! Serde helpers for service JSON that encodes integers as strings.
//!
//! NCBI Datasets reports are produced from protobuf definitions where 64-bit
//! integers are serialized as JSON strings (`"gene_id": "59272"`), while
//! hand-built documents and older endpoints use plain numbers. Both forms are
//! accepted here.
use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

impl NumberOrString {
    fn into_u64<E: de::Error>(self) -> Result<Option<u64>, E> {
        match self {
            NumberOrString::Number(n) => Ok(Some(n)),
            NumberOrString::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|e| E::custom(format!("invalid integer '{}': {}", trimmed, e)))
            }
        }
    }
}

/// Required integer, number or numeric string.
pub fn u64_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?
        .into_u64::<D::Error>()?
        .ok_or_else(|| de::Error::custom("expected an integer, found an empty string"))
}

/// Optional integer; `null`, a missing key and `""` all map to `None`.
///
/// Use together with `#[serde(default)]` so an absent key never reaches here.
pub fn opt_u64_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => value.into_u64(),
        None => Ok(None),
    }
}
