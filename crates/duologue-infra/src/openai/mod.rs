//! OpenAI client -- concrete [`Embedder`] and [`TextGenerator`] backend.
//!
//! Talks to the embeddings endpoint (`/v1/embeddings`) and the chat
//! completions endpoint (`/v1/chat/completions`) with bearer
//! authentication. The API key is wrapped in [`secrecy::SecretString`]
//! and is never logged or included in `Debug` output.

mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use duologue_core::embedding::Embedder;
use duologue_core::generation::TextGenerator;
use duologue_types::error::ServiceError;
use duologue_types::llm::{GenerationRequest, GenerationResponse};

use self::types::{ChatCompletionResponse, EmbeddingRequest, EmbeddingResponse};

/// Client for the OpenAI embeddings and chat completions APIs.
///
/// One instance serves both personas: the persona-specific part of a run
/// is the search index, not the generation backend.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    embedding_model: String,
}

impl OpenAiClient {
    pub fn new(api_key: SecretString, embedding_model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
            embedding_model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// OpenAiClient intentionally does NOT derive Debug to prevent accidental
// exposure of internal state. The SecretString field ensures the API key
// is never printed either way.

impl Embedder for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ServiceError> {
        let body = EmbeddingRequest {
            model: &self.embedding_model,
            input: text,
        };

        let response = self
            .client
            .post(self.url("/v1/embeddings"))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status(status.as_u16(), &error_body));
        }

        let parsed: EmbeddingResponse = response.json().await.map_err(|e| {
            ServiceError::Deserialization(format!("failed to parse embeddings response: {e}"))
        })?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                ServiceError::Deserialization("embeddings response contained no data".to_string())
            })
    }

    fn model_name(&self) -> &str {
        &self.embedding_model
    }

    fn dimension(&self) -> usize {
        embedding_dimension(&self.embedding_model)
    }
}

impl TextGenerator for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ServiceError> {
        tracing::debug!(model = %request.model, units = request.messages.len(), "generation call");

        let response = self
            .client
            .post(self.url("/v1/chat/completions"))
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status(status.as_u16(), &error_body));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            ServiceError::Deserialization(format!("failed to parse completion response: {e}"))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(GenerationResponse {
            content,
            model: parsed.model,
        })
    }
}

/// Map an unsuccessful HTTP status to a [`ServiceError`].
fn map_status(status: u16, body: &str) -> ServiceError {
    match status {
        401 => ServiceError::AuthenticationFailed,
        429 => ServiceError::RateLimited,
        _ => ServiceError::Provider {
            message: format!("HTTP {status}: {body}"),
        },
    }
}

/// Output dimensionality of the known OpenAI embedding models.
fn embedding_dimension(model: &str) -> usize {
    if model.contains("3-large") { 3072 } else { 1536 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> OpenAiClient {
        OpenAiClient::new(
            SecretString::from("test-key-not-real"),
            "text-embedding-3-small".to_string(),
        )
    }

    #[test]
    fn test_generator_name() {
        assert_eq!(make_client().name(), "openai");
    }

    #[test]
    fn test_embedding_model_dimension() {
        let client = make_client();
        assert_eq!(client.model_name(), "text-embedding-3-small");
        assert_eq!(client.dimension(), 1536);
    }

    #[test]
    fn test_large_embedding_model_dimension() {
        let client = OpenAiClient::new(
            SecretString::from("test-key"),
            "text-embedding-3-large".to_string(),
        );
        assert_eq!(client.dimension(), 3072);
    }

    #[test]
    fn test_base_url_override() {
        let client = make_client().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            client.url("/v1/embeddings"),
            "http://localhost:8080/v1/embeddings"
        );
    }

    #[test]
    fn test_map_status_auth() {
        assert!(matches!(
            map_status(401, "unauthorized"),
            ServiceError::AuthenticationFailed
        ));
    }

    #[test]
    fn test_map_status_rate_limit() {
        assert!(matches!(map_status(429, ""), ServiceError::RateLimited));
    }

    #[test]
    fn test_map_status_other() {
        let err = map_status(503, "overloaded");
        match err {
            ServiceError::Provider { message } => {
                assert!(message.contains("503"));
                assert!(message.contains("overloaded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
