use serde::Deserialize;

/// Decoded `/generate` request body.
///
/// Every field is optional. A missing field, `null`, or a value of the wrong
/// JSON type decodes to the empty default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Brief {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub purpose: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub target_type: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub age: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub job: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub interest: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub product: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub region: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub strength: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub competitor: Vec<String>,
}

impl Brief {
    /// Competitor URLs worth fetching, in input order. Empty entries are skipped.
    pub fn competitor_urls(&self) -> impl Iterator<Item = &str> {
        self.competitor
            .iter()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            _ => String::new(),
        })
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }
}
