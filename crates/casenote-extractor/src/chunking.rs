//! Word-band chunking for long judgment text
//!
//! Documents are cut into chunks of roughly `min_words..=max_words` words at
//! paragraph boundaries, splitting inside a paragraph only when it would
//! overflow the band, and then preferring a sentence boundary for the cut.

/// Default lower word bound per chunk
pub const DEFAULT_MIN_WORDS: usize = 3000;

/// Default upper word bound per chunk
pub const DEFAULT_MAX_WORDS: usize = 3500;

/// Splits text into word-bounded chunks
///
/// Chunks are accumulated paragraph by paragraph (single line breaks) with a
/// cumulative word counter. A buffer that reaches `min_words` closes
/// immediately; a paragraph that would push the buffer past `max_words` is
/// split at the latest sentence-ending period within the remaining word
/// budget, falling back to a plain word cut when no period qualifies.
///
/// Two boundary quirks are part of the contract: the final chunk may fall
/// below `min_words` (whatever text remains is emitted as-is), and the
/// remainder of a split paragraph is not re-split, so a single huge
/// paragraph can yield a chunk above `max_words`.
#[derive(Debug, Clone)]
pub struct TextChunker {
    min_words: usize,
    max_words: usize,
}

impl TextChunker {
    /// Create a chunker with the given word band
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    /// Chunk the given text
    ///
    /// A document at or under `min_words` is returned verbatim as a single
    /// chunk, untrimmed. All other chunks are trimmed of surrounding
    /// whitespace; line breaks between paragraphs inside a chunk are kept.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if count_words(text) <= self.min_words {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_words = 0;

        for paragraph in text.split('\n') {
            let paragraph_words = count_words(paragraph);

            if current_words + paragraph_words <= self.max_words {
                current.push_str(paragraph);
                current.push('\n');
                current_words += paragraph_words;
            } else if current_words >= self.min_words {
                // Buffer already filled its band; close it and carry the
                // paragraph into a fresh one.
                chunks.push(current.trim().to_string());
                current.clear();
                current.push_str(paragraph);
                current.push('\n');
                current_words = paragraph_words;
            } else {
                // The paragraph overflows a buffer still under its minimum,
                // so the paragraph itself is split.
                let budget = self.max_words - current_words;
                let (head, tail) = split_at_sentence(paragraph, budget);

                current.push_str(head);
                current.push('\n');
                chunks.push(current.trim().to_string());

                current.clear();
                current.push_str(tail);
                current.push('\n');
                current_words = count_words(tail);
            }

            // A buffer that has reached the minimum closes immediately, even
            // before the band's upper bound.
            if current_words >= self.min_words {
                chunks.push(current.trim().to_string());
                current.clear();
                current_words = 0;
            }
        }

        // Whatever remains, even bare separators, becomes the final chunk.
        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS)
    }
}

/// Count whitespace-separated words
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Byte ranges of each whitespace-separated word
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(word_start) = start.take() {
                spans.push((word_start, idx));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(word_start) = start {
        spans.push((word_start, text.len()));
    }

    spans
}

/// Split a paragraph after at most `budget` words, preferring the latest
/// word within budget that ends a sentence
fn split_at_sentence(paragraph: &str, budget: usize) -> (&str, &str) {
    let spans = word_spans(paragraph);
    let limit = budget.min(spans.len());
    if limit == 0 {
        return ("", paragraph);
    }

    let mut cut = limit;
    for i in (1..=limit).rev() {
        let (start, end) = spans[i - 1];
        if paragraph[start..end].ends_with('.') {
            cut = i;
            break;
        }
    }

    let cut_byte = spans[cut - 1].1;
    (&paragraph[..cut_byte], &paragraph[cut_byte..])
}
