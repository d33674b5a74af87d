use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::text_utils::parse_date_time;

/// A date read from front matter.
///
/// TOML front matter may carry a native date (`publishedAt = 2024-04-22`), YAML front matter
/// always hands over text. Both end up in [`parse_date_time`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ContentDate(pub NaiveDateTime);

impl<'de> Deserialize<'de> for ContentDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = toml::Value::deserialize(deserializer)?;
        let text = match value {
            toml::Value::Datetime(dt) => dt.to_string(),
            toml::Value::String(s) => s,
            other => return Err(Error::custom(format!("expected a date, found {}", other.type_str()))),
        };
        let date = parse_date_time(&text).map_err(Error::custom)?;
        Ok(ContentDate(date))
    }
}
