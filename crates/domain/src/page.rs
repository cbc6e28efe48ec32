use serde::{Deserialize, Deserializer};

/// One page of a paginated list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub resources: Vec<T>,
}

impl<T> Page<T> {
    /// The next page reference, if the server returned a non-empty one.
    pub fn next_path(&self) -> Option<&str> {
        self.next_url.as_deref().filter(|next| !next.is_empty())
    }
}

/// `"resources": null` reads as an empty page.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
