//! Conversation driver: alternates two personas for a fixed round count.
//!
//! The run proceeds seed -> (persona B, persona A) x rounds -> done.
//! Each message strictly depends on the previous one, so execution is
//! fully sequential: 1 + 2 x rounds generation calls in total, each
//! preceded by one embedding call and one search call.

use duologue_types::conversation::ConversationTurn;
use duologue_types::error::ServiceError;

use crate::embedding::Embedder;
use crate::generation::TextGenerator;
use crate::generator::ResponseGenerator;
use crate::persona::Persona;
use crate::search::ChunkIndex;

/// Fixed prompt used to open the conversation.
pub const SEED_PROMPT: &str = "Ask a question about something that interests you.";

/// Default number of B/A rounds after the seed turn.
pub const DEFAULT_ROUNDS: usize = 5;

/// Drives the alternating two-persona conversation.
///
/// Holds only the loop parameters; the latest message is the sole
/// conversational state, threaded from turn to turn.
pub struct ConversationDriver {
    rounds: usize,
    seed_prompt: String,
}

impl ConversationDriver {
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            seed_prompt: SEED_PROMPT.to_string(),
        }
    }

    /// Override the seed prompt given to persona A on the first turn.
    pub fn with_seed_prompt(mut self, seed_prompt: impl Into<String>) -> Self {
        self.seed_prompt = seed_prompt.into();
        self
    }

    /// Run the conversation to completion, reporting each turn through
    /// `on_turn` as it is produced.
    ///
    /// Persona A speaks first (seeded with the fixed prompt); each round
    /// then invokes persona B with the previous output and persona A with
    /// B's reply, both passed verbatim. There is no branching on content
    /// and no early exit: the first failed remote call aborts the run and
    /// no further turns are produced.
    pub async fn run<E, G, SA, SB>(
        &self,
        generator: &ResponseGenerator<'_, E, G>,
        persona_a: &Persona<SA>,
        persona_b: &Persona<SB>,
        mut on_turn: impl FnMut(&ConversationTurn),
    ) -> Result<(), ServiceError>
    where
        E: Embedder,
        G: TextGenerator,
        SA: ChunkIndex,
        SB: ChunkIndex,
    {
        let mut output = generator.generate(persona_a, &self.seed_prompt).await?;
        on_turn(&ConversationTurn::new(persona_a.name(), output.as_str()));

        for round in 0..self.rounds {
            tracing::debug!(round, "conversation round");

            output = generator.generate(persona_b, &output).await?;
            on_turn(&ConversationTurn::new(persona_b.name(), output.as_str()));

            output = generator.generate(persona_a, &output).await?;
            on_turn(&ConversationTurn::new(persona_a.name(), output.as_str()));
        }

        Ok(())
    }
}

impl Default for ConversationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}
