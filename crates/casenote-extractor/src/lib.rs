//! Casenote Extractor
//!
//! Turns long legal-judgment text into one structured record of citations,
//! facts, statutes, precedents, ratio, and rulings.
//!
//! # Overview
//!
//! A judgment rarely fits a model's context window, so the document is first
//! split into word-bounded chunks at sentence-friendly boundaries. Each chunk
//! goes through the LLM with the extraction prompt, the response is parsed
//! tolerantly, and the per-chunk partials merge in order into a single
//! [`JudgmentRecord`](casenote_domain::JudgmentRecord).
//!
//! # Architecture
//!
//! ```text
//! Text → TextChunker → per chunk: PromptBuilder → LLM → parser → JudgmentRecord
//! ```
//!
//! # Key Features
//!
//! - **Word-band chunking**: chunks close between a configurable minimum and
//!   maximum word count, splitting inside a paragraph only when forced
//! - **Sentence-aware splits**: forced splits prefer the latest period within
//!   the word budget over a mid-sentence cut
//! - **Per-chunk failure recovery**: a chunk that times out or returns junk
//!   is recorded and skipped, never fatal to the document
//! - **Tolerant payload parsing**: malformed fields degrade to empty, the
//!   rest of the payload still merges
//!
//! # Example Usage
//!
//! ```no_run
//! use casenote_extractor::{ExtractorConfig, JudgmentExtractor};
//! use casenote_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::default();
//! let extractor = JudgmentExtractor::new(llm, ExtractorConfig::default())
//!     .with_model_name("llama3");
//!
//! let result = extractor.process("The appellant was convicted under...").await;
//!
//! println!(
//!     "{} chunks, {} failed",
//!     result.metadata.chunk_count,
//!     result.failures.len()
//! );
//! println!("{}", result.record.to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod chunking;
mod parser;
mod extractor;

#[cfg(test)]
mod tests;

pub use chunking::{TextChunker, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::JudgmentExtractor;
pub use types::{
    ChunkExtraction, ChunkFailure, ExtractionMetadata, ExtractionResult, StatuteEntry,
};
