use serde::{Deserialize, Deserializer};

/// Deserializes a string with surrounding whitespace removed, so length
/// validation sees what will be stored.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_owned())
}
