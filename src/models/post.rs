use serde::{Deserialize, Deserializer, Serialize};

/// One blog post as published in the search feed.
///
/// Every field is optional in the feed: anything absent or wrong-typed is
/// replaced by its default so that a single sloppy entry can never break the
/// whole index. The widget treats all fields as opaque display data; `url` is
/// the only reference back to the source content and is never modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    /// Plain-text excerpt, markup stripped and length-capped by the producer.
    #[serde(deserialize_with = "lenient")]
    pub content: String,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    /// `YYYY-MM-DD`, display-only. The widget imposes no ordering on it.
    #[serde(deserialize_with = "lenient")]
    pub date: String,
    #[serde(deserialize_with = "lenient")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub categories: Vec<String>,
}

/// Deserialize a field, substituting the default when the value has the wrong
/// type. The value is drained as arbitrary JSON first so a failed conversion
/// cannot leave the parser mid-token.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
