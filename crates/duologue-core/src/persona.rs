//! Bot persona definition.

use crate::search::ChunkIndex;

/// A named bot configuration: a fixed system instruction paired with the
/// similarity-search index that grounds its answers.
///
/// Immutable once constructed; both personas are built at startup and
/// live for the process lifetime.
pub struct Persona<S> {
    name: String,
    system_instruction: String,
    index: S,
}

impl<S: ChunkIndex> Persona<S> {
    pub fn new(
        name: impl Into<String>,
        system_instruction: impl Into<String>,
        index: S,
    ) -> Self {
        Self {
            name: name.into(),
            system_instruction: system_instruction.into(),
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn index(&self) -> &S {
        &self.index
    }
}
