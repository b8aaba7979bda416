//! Conversation orchestration logic for Duologue.
//!
//! This crate holds the traits at the service seams (embedding, similarity
//! search, text generation), the context composer, the persona definition,
//! the response generator, and the conversation driver. Concrete clients
//! live in duologue-infra.

pub mod compose;
pub mod driver;
pub mod embedding;
pub mod generation;
pub mod generator;
pub mod persona;
pub mod search;

pub use driver::ConversationDriver;
pub use generator::ResponseGenerator;
pub use persona::Persona;
