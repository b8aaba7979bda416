//! Shared domain types for Duologue.
//!
//! This crate has no I/O and no async: it holds the data shapes passed
//! between the core orchestration logic and the infrastructure clients,
//! plus the error taxonomy.

pub mod conversation;
pub mod error;
pub mod llm;
pub mod retrieval;
