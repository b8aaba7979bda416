//! Similarity-search result types.

use serde::{Deserialize, Serialize};

/// One content chunk returned by a similarity search.
///
/// `similarity` is optional: search backends are expected to return a
/// numeric similarity column, but rows where it is absent (or null)
/// deserialize to `None` and are rendered as `n/a` by the composer.
/// Extra metadata columns in the source row are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub similarity: Option<f64>,
}

impl RetrievedChunk {
    pub fn new(content: impl Into<String>, similarity: f64) -> Self {
        Self {
            content: content.into(),
            similarity: Some(similarity),
        }
    }
}
