//! Text generation trait.
//!
//! Defines the interface for submitting a role-tagged prompt to a hosted
//! LLM and receiving generated text. Implementations live in duologue-infra.

use duologue_types::error::ServiceError;
use duologue_types::llm::{GenerationRequest, GenerationResponse};

/// Trait for text-generation backends.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "openai").
    fn name(&self) -> &str;

    /// Submit a generation request and return the full response.
    ///
    /// Messages are sent in request order; the backend is expected to
    /// honor that ordering.
    fn complete(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, ServiceError>> + Send;
}
