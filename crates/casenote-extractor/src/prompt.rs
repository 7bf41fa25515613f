//! LLM prompt engineering for judgment component extraction

/// Builds the per-chunk extraction prompt
pub struct PromptBuilder {
    chunk: String,
}

impl PromptBuilder {
    /// Create a prompt builder for one chunk of judgment text
    pub fn new(chunk: String) -> Self {
        Self { chunk }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and component definitions
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The chunk to analyze
        prompt.push_str("Text to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.chunk);
        prompt.push_str("\n---\n\n");

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Extract the structured components of a legal judgment from the following text.
The text is one chunk of a longer judgment, supplied one chunk at a time: components
may be spread across chunks, and some chunks contain no components at all. That is
normal; report whatever this chunk holds.

Components to extract:
- citations: case names and legal citations, often formatted as "XYZ v. ABC, [year]"
- facts: the sequence of events and factual background that gave rise to the case
- statutes: mentions of legal acts, sections of a penal code, or constitutional articles
- precedents: earlier cases relied on by the court, e.g. "in ABC v. DEF, the court held..."
- ratio: the reasoning or legal principles applied to the facts, e.g. "the court reasoned that..."
- rulings: the court's decisions, including rulings from different stages of appeal

Rules:
- Extract only text that explicitly matches a component; never summarize or infer
- File each statute under "acts", "sections", or "articles"
- A chunk with no components yields empty arrays for every category"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{
  "citations": [],
  "facts": [],
  "statutes": {
    "acts": [],
    "sections": [],
    "articles": []
  },
  "precedents": [],
  "ratio": [],
  "rulings": []
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;
