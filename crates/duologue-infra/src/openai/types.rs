//! Wire types for the OpenAI REST API.
//!
//! Only the fields this system reads are modeled; everything else in the
//! responses is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/embeddings`.
#[derive(Debug, Serialize)]
pub(crate) struct EmbeddingRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
}

/// Response body for `POST /v1/embeddings`.
#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingData {
    pub embedding: Vec<f32>,
}

/// Response body for `POST /v1/chat/completions`.
///
/// The request side needs no dedicated wire type: a
/// [`duologue_types::llm::GenerationRequest`] already serializes to the
/// `{ "model": ..., "messages": [{ "role": ..., "content": ... }] }`
/// shape the endpoint expects.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub model: String,
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    pub content: Option<String>,
}
