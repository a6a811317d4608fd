use serde::{
    self,
    Deserialize,
    Deserializer,
};

/// Reads an optional tool argument, where an empty string means the
/// argument was left out.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let string = Option::<String>::deserialize(deserializer)?;

    Ok(match string {
        None => None,
        Some(s) if s.is_empty() => None,
        Some(s) => Some(s),
    })
}
