//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{ExtractorConfig, JudgmentExtractor};
    use casenote_domain::traits::{LlmProvider, LlmResponse};
    use casenote_llm::MockProvider;

    /// Band small enough that a few short paragraphs make several chunks
    fn narrow_band_config() -> ExtractorConfig {
        ExtractorConfig {
            min_chunk_words: 5,
            max_chunk_words: 8,
            extraction_timeout_secs: 120,
        }
    }

    #[tokio::test]
    async fn test_full_extraction_flow() {
        let llm = MockProvider::new(
            r#"{
                "citations": ["State v. Rao, 2018"],
                "facts": ["The vehicle was seized at the border."],
                "statutes": {
                    "acts": ["Customs Act, 1962"],
                    "sections": ["Section 135"],
                    "articles": []
                },
                "precedents": ["Kumar v. State, 2009"],
                "ratio": ["Possession alone does not establish intent."],
                "rulings": ["The conviction is set aside."]
            }"#,
        );

        let extractor = JudgmentExtractor::new(llm, ExtractorConfig::default());
        let result = extractor.process("The appellant challenged the seizure.").await;

        let record = &result.record;
        assert!(record.is_complete());
        assert_eq!(record.citations(), ["State v. Rao, 2018"]);
        assert_eq!(record.facts(), ["The vehicle was seized at the border."]);
        assert_eq!(record.statutes().acts, ["Customs Act, 1962"]);
        assert_eq!(record.statutes().sections, ["Section 135"]);
        assert_eq!(record.precedents(), ["Kumar v. State, 2009"]);
        assert_eq!(record.rulings(), ["The conviction is set aside."]);
        assert!(result.failures.is_empty());
        assert_eq!(result.metadata.chunk_count, 1);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_other_chunks() {
        let llm = MockProvider::default();
        llm.push_response(r#"{"citations": ["A v. B, 2001"], "facts": ["First fact."]}"#);
        llm.push_error("model offline");
        llm.push_response(r#"{"citations": ["C v. D, 2003"], "rulings": ["Appeal allowed."]}"#);

        let probe = llm.clone();
        let extractor = JudgmentExtractor::new(llm, narrow_band_config());

        // Three 6-word paragraphs, one chunk each under the narrow band.
        let text = "one two three four five six\nseven eight nine ten eleven twelve\nthirteen fourteen fifteen sixteen seventeen eighteen";
        let result = extractor.process(text).await;

        assert_eq!(probe.call_count(), 3);
        assert_eq!(result.metadata.chunk_count, 3);

        let record = &result.record;
        assert!(record.is_complete());
        assert_eq!(record.citations(), ["A v. B, 2001", "C v. D, 2003"]);
        assert_eq!(record.facts(), ["First fact."]);
        assert_eq!(record.rulings(), ["Appeal allowed."]);

        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].chunk_index, 1);
        assert!(result.failures[0].reason.contains("model offline"));
    }

    #[tokio::test]
    async fn test_invalid_json_chunk_contributes_nothing() {
        let llm = MockProvider::new("This is not JSON");
        let extractor = JudgmentExtractor::new(llm, ExtractorConfig::default());

        let result = extractor.process("Some judgment text.").await;

        assert!(result.record.is_complete());
        assert!(result.record.is_empty());
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].chunk_index, 0);
    }

    #[tokio::test]
    async fn test_markdown_wrapped_response_is_accepted() {
        let llm = MockProvider::new(
            "```json\n{\"rulings\": [\"The appeal is dismissed.\"]}\n```",
        );
        let extractor = JudgmentExtractor::new(llm, ExtractorConfig::default());

        let result = extractor.process("Some judgment text.").await;

        assert_eq!(result.record.rulings(), ["The appeal is dismissed."]);
        assert!(result.failures.is_empty());
    }

    #[tokio::test]
    async fn test_flat_statute_list_files_under_fallback() {
        let llm = MockProvider::new(r#"{"statutes": ["Evidence Act", "Article 21"]}"#);
        let extractor = JudgmentExtractor::new(llm, ExtractorConfig::default());

        let result = extractor.process("Some judgment text.").await;

        assert_eq!(result.record.statutes().acts, ["Evidence Act", "Article 21"]);
        assert!(result.record.statutes().sections.is_empty());
        assert!(result.record.statutes().articles.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_citations_across_chunks_dedup() {
        let llm = MockProvider::default();
        llm.push_response(r#"{"citations": ["X v. Y, 2020"], "facts": ["Fact one."]}"#);
        llm.push_response(r#"{"citations": ["X v. Y, 2020"], "facts": ["Fact two."]}"#);

        let extractor = JudgmentExtractor::new(llm, narrow_band_config());

        let text = "one two three four five six\nseven eight nine ten eleven twelve";
        let result = extractor.process(text).await;

        assert_eq!(result.metadata.chunk_count, 2);
        assert_eq!(result.record.citations(), ["X v. Y, 2020"]);
        assert_eq!(result.record.facts(), ["Fact one.", "Fact two."]);
    }

    /// Provider that never answers within a short timeout
    struct SlowProvider;

    impl LlmProvider for SlowProvider {
        type Error = casenote_llm::LlmError;

        fn generate(&self, _prompt: &str) -> Result<LlmResponse, Self::Error> {
            std::thread::sleep(std::time::Duration::from_secs(2));
            Ok(LlmResponse::Text("{}".to_string()))
        }
    }

    #[tokio::test]
    async fn test_timeout_is_recorded_as_chunk_failure() {
        let config = ExtractorConfig {
            extraction_timeout_secs: 1,
            ..ExtractorConfig::default()
        };
        let extractor = JudgmentExtractor::new(SlowProvider, config);

        let result = extractor.process("Some judgment text.").await;

        assert!(result.record.is_complete());
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].reason.contains("timeout"));
    }
}
