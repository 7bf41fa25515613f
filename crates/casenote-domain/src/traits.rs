//! Core traits for the casenote system.

/// A completion returned by a language model backend.
///
/// Backends differ in shape: completion-style APIs hand back bare text,
/// chat-style APIs hand back a message object. Both collapse to the same
/// string through [`content`](LlmResponse::content), so callers never branch
/// on the variant.
///
/// # Examples
///
/// ```
/// use casenote_domain::LlmResponse;
///
/// let text = LlmResponse::Text("{\"citations\": []}".to_string());
/// let chat = LlmResponse::Message {
///     content: "{\"citations\": []}".to_string(),
/// };
/// assert_eq!(text.content(), chat.content());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LlmResponse {
    /// A bare completion string, as produced by completion-style endpoints.
    Text(String),
    /// A chat-style message wrapper.
    Message {
        /// The message body.
        content: String,
    },
}

impl LlmResponse {
    /// The response text, regardless of shape.
    pub fn content(&self) -> &str {
        match self {
            LlmResponse::Text(text) => text,
            LlmResponse::Message { content } => content,
        }
    }

    /// Consume the response, yielding the text.
    pub fn into_content(self) -> String {
        match self {
            LlmResponse::Text(text) => text,
            LlmResponse::Message { content } => content,
        }
    }
}

/// Interface to a language model backend.
///
/// Implementations are synchronous; the extraction pipeline bridges them
/// onto its async runtime. An implementation should be cheap to clone or
/// share, since a long document drives many calls through one provider.
pub trait LlmProvider {
    /// Error type produced by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run one prompt to completion and return the model's response.
    fn generate(&self, prompt: &str) -> Result<LlmResponse, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_reads_both_shapes() {
        let text = LlmResponse::Text("alpha".to_string());
        let message = LlmResponse::Message {
            content: "alpha".to_string(),
        };
        assert_eq!(text.content(), "alpha");
        assert_eq!(message.content(), "alpha");
    }

    #[test]
    fn test_into_content_consumes() {
        let response = LlmResponse::Message {
            content: "beta".to_string(),
        };
        assert_eq!(response.into_content(), "beta");
    }
}
