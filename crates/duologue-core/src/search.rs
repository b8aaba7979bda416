//! Similarity search trait.
//!
//! Defines the interface for retrieving the stored chunks nearest to a
//! query embedding. Implementations (e.g., a Supabase RPC call) live in
//! duologue-infra.

use duologue_types::error::ServiceError;
use duologue_types::retrieval::RetrievedChunk;

/// Trait for vector similarity search over a chunk store.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait ChunkIndex: Send + Sync {
    /// Return the `top_k` chunks most similar to the query embedding.
    ///
    /// Results are ordered descending by similarity as ranked by the
    /// backing index; tie order is the index's own default and is not
    /// guaranteed stable. An empty result is not an error: it means the
    /// store had no matches (or is empty).
    fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<RetrievedChunk>, ServiceError>> + Send;
}
