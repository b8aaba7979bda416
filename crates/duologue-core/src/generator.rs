//! Response generator: one retrieval-augmented model invocation.
//!
//! For a given persona and incoming message: embed the message, search the
//! persona's index, compose the retrieved context, and submit a single
//! three-part prompt (context, raw message, persona instruction) to the
//! text-generation backend.

use duologue_types::error::ServiceError;
use duologue_types::llm::{GenerationRequest, PromptMessage};

use crate::compose::compose;
use crate::embedding::Embedder;
use crate::generation::TextGenerator;
use crate::persona::Persona;
use crate::search::ChunkIndex;

/// Preamble for the context message unit, instructing the model to admit
/// when the retrieved context is insufficient.
pub const CONTEXT_PREAMBLE: &str =
    "Use the retrieved context below to answer. If it doesn't contain the answer, say so.";

/// Default number of chunks requested per similarity search.
pub const DEFAULT_TOP_K: usize = 5;

/// Combines an embedder and a text-generation backend into a single
/// retrieval-augmented `generate` operation.
///
/// Holds references to the shared clients; the persona supplies the
/// search index, so one generator serves both personas.
pub struct ResponseGenerator<'a, E, G> {
    embedder: &'a E,
    generator: &'a G,
    model: String,
    top_k: usize,
}

impl<'a, E: Embedder, G: TextGenerator> ResponseGenerator<'a, E, G> {
    pub fn new(embedder: &'a E, generator: &'a G, model: impl Into<String>) -> Self {
        Self {
            embedder,
            generator,
            model: model.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of chunks requested per search.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Produce one reply for `user_message` as `persona`.
    ///
    /// Issues exactly one embedding call and one search call before the
    /// generation call. The three prompt message units are submitted in a
    /// fixed order (context, user message, persona instruction); that
    /// ordering is part of the observable prompt shape and must not be
    /// rearranged. Any remote failure propagates unchanged.
    pub async fn generate<S: ChunkIndex>(
        &self,
        persona: &Persona<S>,
        user_message: &str,
    ) -> Result<String, ServiceError> {
        let embedding = self.embedder.embed(user_message).await?;
        let chunks = persona.index().search(&embedding, self.top_k).await?;
        tracing::debug!(
            persona = persona.name(),
            retrieved = chunks.len(),
            "similarity search complete"
        );

        let context = compose(&chunks);
        let request = GenerationRequest {
            model: self.model.clone(),
            messages: vec![
                PromptMessage::system(format!(
                    "{CONTEXT_PREAMBLE}\n\nRETRIEVED CONTEXT:\n{context}"
                )),
                PromptMessage::user(user_message),
                PromptMessage::system(persona.system_instruction()),
            ],
        };

        let response = self.generator.complete(&request).await?;
        Ok(response.content)
    }
}
