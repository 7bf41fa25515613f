//! Casenote Domain Layer
//!
//! This crate contains the core model for the judgment-extraction system:
//! the judgment record that accumulates per-chunk extractions, the statute
//! category table, and the trait interface to the language-model layer.
//!
//! ## Key Concepts
//!
//! - **Judgment Record**: the single mutable accumulator for one document
//!   (citations, facts, statutes, precedents, ratio, rulings)
//! - **Statute Categories**: the three fixed buckets (`acts`, `sections`,
//!   `articles`) plus the fallback rule for unrecognized labels
//! - **LlmProvider**: the injected capability that turns a prompt into a
//!   completion; implementations live in `casenote-llm`
//!
//! ## Architecture
//!
//! The record is a plain struct with one mutation method per field category.
//! Merge order determines first-seen dedup order, so callers merge chunk
//! results strictly in chunk order. Infrastructure (HTTP, providers, CLI)
//! lives in other crates and reaches this one only through the types here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod judgment;
pub mod statute;
pub mod traits;

// Re-exports for convenience
pub use judgment::JudgmentRecord;
pub use statute::{StatuteCategory, StatuteTable};
pub use traits::{LlmProvider, LlmResponse};
