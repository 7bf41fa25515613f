//! Judgment record module - the accumulated output for one processed document.

use crate::statute::{StatuteCategory, StatuteTable};
use serde::{Deserialize, Serialize};

/// The structured components of one legal judgment, accumulated chunk by
/// chunk.
///
/// A record starts empty, receives one merge pass per chunk of the source
/// document, and is finalized exactly once when the last chunk has been
/// merged. Finalization freezes the record: every later mutation call is a
/// no-op, so the serialized form can never drift after it has been produced.
///
/// Dedup policy per field:
///
/// - `citations`, `precedents`: ordered sets; first occurrence wins, exact
///   value equality
/// - `statutes`: ordered set per bucket (the same string may appear in two
///   different buckets)
/// - `facts`, `ratio`, `rulings`: plain ordered sequences, duplicates kept
///
/// The serialized representation carries exactly the six component fields;
/// the completion flag is in-memory state only.
///
/// # Examples
///
/// ```
/// use casenote_domain::JudgmentRecord;
///
/// let mut record = JudgmentRecord::new();
/// record.add_citation("Donoghue v. Stevenson, [1932] AC 562");
/// record.add_citation("Donoghue v. Stevenson, [1932] AC 562");
/// assert_eq!(record.citations().len(), 1);
///
/// record.finalize();
/// record.add_citation("Carlill v. Carbolic Smoke Ball Co, [1893] 1 QB 256");
/// assert_eq!(record.citations().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    citations: Vec<String>,
    facts: Vec<String>,
    statutes: StatuteTable,
    precedents: Vec<String>,
    ratio: Vec<String>,
    rulings: Vec<String>,
    #[serde(skip)]
    complete: bool,
}

impl JudgmentRecord {
    /// Create an empty, unfinalized record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a citation unless it is empty or already present.
    pub fn add_citation(&mut self, citation: impl Into<String>) {
        if self.complete {
            return;
        }
        let citation = citation.into();
        if citation.is_empty() || self.citations.contains(&citation) {
            return;
        }
        self.citations.push(citation);
    }

    /// Append a fact unless it is empty. Facts are not deduplicated.
    pub fn add_fact(&mut self, fact: impl Into<String>) {
        if self.complete {
            return;
        }
        let fact = fact.into();
        if fact.is_empty() {
            return;
        }
        self.facts.push(fact);
    }

    /// File a statute under the bucket named by `category`.
    ///
    /// Unrecognized category labels resolve to the fallback bucket (see
    /// [`StatuteCategory::FALLBACK`]) rather than being dropped. Values are
    /// deduplicated within a bucket only.
    ///
    /// # Examples
    ///
    /// ```
    /// use casenote_domain::JudgmentRecord;
    ///
    /// let mut record = JudgmentRecord::new();
    /// record.add_statute("acts", "Contract Act, 1872");
    /// record.add_statute("sections", "Contract Act, 1872");
    /// assert_eq!(record.statutes().acts, vec!["Contract Act, 1872"]);
    /// assert_eq!(record.statutes().sections, vec!["Contract Act, 1872"]);
    /// ```
    pub fn add_statute(&mut self, category: &str, statute: impl Into<String>) {
        self.add_statute_in(StatuteCategory::from_label(category), statute);
    }

    /// File a statute under an already-resolved category.
    pub fn add_statute_in(&mut self, category: StatuteCategory, statute: impl Into<String>) {
        if self.complete {
            return;
        }
        let statute = statute.into();
        let bucket = self.statutes.bucket_mut(category);
        if bucket.contains(&statute) {
            return;
        }
        bucket.push(statute);
    }

    /// Append a precedent unless it is empty or already present.
    pub fn add_precedent(&mut self, precedent: impl Into<String>) {
        if self.complete {
            return;
        }
        let precedent = precedent.into();
        if precedent.is_empty() || self.precedents.contains(&precedent) {
            return;
        }
        self.precedents.push(precedent);
    }

    /// Append a ratio decidendi passage unless it is empty. Not deduplicated.
    pub fn add_ratio(&mut self, ratio: impl Into<String>) {
        if self.complete {
            return;
        }
        let ratio = ratio.into();
        if ratio.is_empty() {
            return;
        }
        self.ratio.push(ratio);
    }

    /// Append a ruling unless it is empty. Not deduplicated; a judgment may
    /// carry one ruling per stage of appeal.
    pub fn add_ruling(&mut self, ruling: impl Into<String>) {
        if self.complete {
            return;
        }
        let ruling = ruling.into();
        if ruling.is_empty() {
            return;
        }
        self.rulings.push(ruling);
    }

    /// Mark the record complete, freezing it. Idempotent.
    pub fn finalize(&mut self) {
        self.complete = true;
    }

    /// Whether [`finalize`](Self::finalize) has been called.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Citations in first-seen order.
    pub fn citations(&self) -> &[String] {
        &self.citations
    }

    /// Facts in merge order.
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// The statute buckets.
    pub fn statutes(&self) -> &StatuteTable {
        &self.statutes
    }

    /// Precedents in first-seen order.
    pub fn precedents(&self) -> &[String] {
        &self.precedents
    }

    /// Ratio decidendi passages in merge order.
    pub fn ratio(&self) -> &[String] {
        &self.ratio
    }

    /// Rulings in merge order.
    pub fn rulings(&self) -> &[String] {
        &self.rulings
    }

    /// True when no component has been merged yet.
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
            && self.facts.is_empty()
            && self.statutes.is_empty()
            && self.precedents.is_empty()
            && self.ratio.is_empty()
            && self.rulings.is_empty()
    }

    /// Render the six-field external representation as pretty-printed JSON.
    ///
    /// Usable on partial state too, which is handy when inspecting a record
    /// mid-run; the completion flag is never part of the output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
