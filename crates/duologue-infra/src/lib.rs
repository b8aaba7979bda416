//! Infrastructure implementations for Duologue.
//!
//! Concrete clients for the external collaborators (OpenAI embeddings and
//! chat completions, Supabase PostgREST similarity search) plus the
//! environment-based configuration loader.

pub mod config;
pub mod openai;
pub mod supabase;
