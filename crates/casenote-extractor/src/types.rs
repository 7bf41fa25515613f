//! Extraction result types

use casenote_domain::JudgmentRecord;

/// Partial extraction parsed from one chunk's model response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkExtraction {
    /// Citations found in the chunk
    pub citations: Vec<String>,

    /// Factual background passages
    pub facts: Vec<String>,

    /// Statute references, each tagged with the category label the model used
    pub statutes: Vec<StatuteEntry>,

    /// Precedents relied on
    pub precedents: Vec<String>,

    /// Ratio decidendi passages
    pub ratio: Vec<String>,

    /// Rulings found in the chunk
    pub rulings: Vec<String>,
}

/// One statute reference as named by the model
#[derive(Debug, Clone, PartialEq)]
pub struct StatuteEntry {
    /// Category label as it appeared in the payload
    pub category: String,

    /// Statute text
    pub value: String,
}

impl ChunkExtraction {
    /// Merge this chunk's contributions into the record, field by field
    ///
    /// Dedup and fallback filing happen inside the record; merge order here
    /// is the payload's order, which fixes first-seen order across chunks.
    pub fn apply_to(&self, record: &mut JudgmentRecord) {
        for citation in &self.citations {
            record.add_citation(citation.clone());
        }
        for fact in &self.facts {
            record.add_fact(fact.clone());
        }
        for statute in &self.statutes {
            record.add_statute(&statute.category, statute.value.clone());
        }
        for precedent in &self.precedents {
            record.add_precedent(precedent.clone());
        }
        for ratio in &self.ratio {
            record.add_ratio(ratio.clone());
        }
        for ruling in &self.rulings {
            record.add_ruling(ruling.clone());
        }
    }

    /// True when the chunk contributed no components
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
            && self.facts.is_empty()
            && self.statutes.is_empty()
            && self.precedents.is_empty()
            && self.ratio.is_empty()
            && self.rulings.is_empty()
    }
}

/// Result of processing one document
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The finalized judgment record
    pub record: JudgmentRecord,

    /// Chunks whose extraction contributed nothing due to an error
    pub failures: Vec<ChunkFailure>,

    /// Metadata about the run
    pub metadata: ExtractionMetadata,
}

/// Information about a chunk whose extraction failed
#[derive(Debug, Clone)]
pub struct ChunkFailure {
    /// Zero-based position of the chunk in the document
    pub chunk_index: usize,

    /// Reason for failure
    pub reason: String,
}

/// Metadata about an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Number of chunks the document split into
    pub chunk_count: usize,

    /// Name of the LLM model used
    pub model_name: String,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp when extraction occurred
    pub timestamp: u64,
}
