//! Core extraction pipeline

use crate::chunking::TextChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_chunk_response;
use crate::prompt::PromptBuilder;
use crate::types::{ChunkExtraction, ChunkFailure, ExtractionMetadata, ExtractionResult};
use casenote_domain::traits::{LlmProvider, LlmResponse};
use casenote_domain::JudgmentRecord;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Drives one judgment document through chunking, extraction, and merging
pub struct JudgmentExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
    model_name: String,
}

impl<L> JudgmentExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
{
    /// Create a new extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new extractor with a specific model name
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// The model name reported in run metadata
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Process one document end to end
    ///
    /// Chunks are generated eagerly, then extracted and merged strictly in
    /// order; merge order is what fixes first-seen dedup order in the
    /// record. A failed chunk is logged and recorded, never fatal, so this
    /// always returns a finalized record.
    pub async fn process(&self, text: &str) -> ExtractionResult {
        let start_time = SystemTime::now();

        let chunker = TextChunker::new(self.config.min_chunk_words, self.config.max_chunk_words);
        let chunks = chunker.chunk(text);

        info!("Split document into {} chunks", chunks.len());

        let mut record = JudgmentRecord::new();
        let mut failures = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("Processing chunk {}/{}", idx + 1, chunks.len());

            match self.process_chunk(chunk).await {
                Ok(extraction) => {
                    if extraction.is_empty() {
                        debug!("Chunk {} contributed no components", idx + 1);
                    }
                    extraction.apply_to(&mut record);
                }
                Err(e) => {
                    warn!("Chunk {}/{} failed, continuing: {}", idx + 1, chunks.len(), e);
                    failures.push(ChunkFailure {
                        chunk_index: idx,
                        reason: e.to_string(),
                    });
                }
            }
        }

        record.finalize();

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        let metadata = ExtractionMetadata {
            chunk_count: chunks.len(),
            model_name: self.model_name.clone(),
            processing_time_ms,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs(),
        };

        info!(
            "Extraction complete: {} chunks, {} failed",
            chunks.len(),
            failures.len()
        );

        ExtractionResult {
            record,
            failures,
            metadata,
        }
    }

    /// Extract one chunk's components
    async fn process_chunk(&self, chunk: &str) -> Result<ChunkExtraction, ExtractorError> {
        let prompt = PromptBuilder::new(chunk.to_string()).build();

        debug!("Prompt length: {} chars", prompt.len());

        // Call LLM with timeout
        let response = timeout(self.config.extraction_timeout(), self.call_llm(&prompt))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        debug!("LLM response length: {} chars", response.content().len());

        parse_chunk_response(response.content())
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: &str) -> Result<LlmResponse, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = prompt.to_string();

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}
