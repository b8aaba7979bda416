//! Supabase similarity-search client -- concrete [`ChunkIndex`].
//!
//! Calls the `match_chunks` stored procedure through the PostgREST RPC
//! endpoint (`/rest/v1/rpc/match_chunks`). The procedure takes a query
//! embedding and a match count and returns rows ordered descending by
//! similarity; extra metadata columns in the rows are ignored.
//!
//! The service role key is wrapped in [`secrecy::SecretString`] and is
//! never logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use duologue_core::search::ChunkIndex;
use duologue_types::error::ServiceError;
use duologue_types::retrieval::RetrievedChunk;

/// Default stored procedure backing the similarity search.
const DEFAULT_RPC_FUNCTION: &str = "match_chunks";

/// RPC request body for the match procedure.
#[derive(Debug, Serialize)]
struct MatchRequest<'a> {
    query_embedding: &'a [f32],
    match_count: usize,
}

/// Similarity search over one Supabase project's chunk table.
///
/// Each persona is bound to its own instance with independent credentials.
pub struct SupabaseChunkIndex {
    client: reqwest::Client,
    base_url: String,
    service_role_key: SecretString,
    rpc_function: String,
}

impl SupabaseChunkIndex {
    pub fn new(base_url: impl Into<String>, service_role_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_role_key,
            rpc_function: DEFAULT_RPC_FUNCTION.to_string(),
        }
    }

    /// Override the stored procedure name.
    pub fn with_rpc_function(mut self, rpc_function: impl Into<String>) -> Self {
        self.rpc_function = rpc_function.into();
        self
    }

    fn rpc_url(&self) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, self.rpc_function)
    }
}

// SupabaseChunkIndex intentionally does NOT derive Debug to prevent
// accidental exposure of internal state. The SecretString field ensures
// the service role key is never printed either way.

impl ChunkIndex for SupabaseChunkIndex {
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>, ServiceError> {
        let body = MatchRequest {
            query_embedding,
            match_count: top_k,
        };

        let response = self
            .client
            .post(self.rpc_url())
            .header("apikey", self.service_role_key.expose_secret())
            .bearer_auth(self.service_role_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => ServiceError::AuthenticationFailed,
                429 => ServiceError::RateLimited,
                _ => ServiceError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        // PostgREST returns a JSON array of rows; a null body (procedure
        // returned nothing) maps to "no matches", which is not an error.
        let rows: Option<Vec<RetrievedChunk>> = response.json().await.map_err(|e| {
            ServiceError::Deserialization(format!("failed to parse search response: {e}"))
        })?;

        let chunks = rows.unwrap_or_default();
        tracing::debug!(rows = chunks.len(), "similarity search returned");
        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_index() -> SupabaseChunkIndex {
        SupabaseChunkIndex::new(
            "https://example.supabase.co",
            SecretString::from("service-role-key-not-real"),
        )
    }

    #[test]
    fn test_rpc_url() {
        assert_eq!(
            make_index().rpc_url(),
            "https://example.supabase.co/rest/v1/rpc/match_chunks"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let index = SupabaseChunkIndex::new(
            "https://example.supabase.co/",
            SecretString::from("key"),
        );
        assert_eq!(
            index.rpc_url(),
            "https://example.supabase.co/rest/v1/rpc/match_chunks"
        );
    }

    #[test]
    fn test_rpc_function_override() {
        let index = make_index().with_rpc_function("match_documents");
        assert_eq!(
            index.rpc_url(),
            "https://example.supabase.co/rest/v1/rpc/match_documents"
        );
    }

    #[test]
    fn test_match_request_shape() {
        let embedding = vec![0.1_f32, 0.2, 0.3];
        let body = MatchRequest {
            query_embedding: &embedding,
            match_count: 5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["match_count"], 5);
        assert_eq!(json["query_embedding"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_row_array_parses_into_chunks() {
        let json = r#"[
            {"id": 1, "content": "Yosemite is in the Sierra Nevada.", "similarity": 0.87},
            {"id": 2, "content": "The Central Valley grows almonds.", "similarity": 0.81, "source": "notes.md"}
        ]"#;
        let rows: Option<Vec<RetrievedChunk>> = serde_json::from_str(json).unwrap();
        let chunks = rows.unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].similarity, Some(0.87));
        assert_eq!(chunks[1].content, "The Central Valley grows almonds.");
    }

    #[test]
    fn test_null_body_means_no_matches() {
        let rows: Option<Vec<RetrievedChunk>> = serde_json::from_str("null").unwrap();
        assert!(rows.unwrap_or_default().is_empty());
    }
}
