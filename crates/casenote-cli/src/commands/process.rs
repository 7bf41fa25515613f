//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use casenote_domain::LlmProvider;
use casenote_extractor::JudgmentExtractor;
use std::fs;
use std::path::Path;

/// Execute the process command.
///
/// Reads the judgment text, runs it through the extraction pipeline, writes
/// the case note as pretty JSON, and prints a summary in the selected
/// format. Failed chunks are reported on stderr; the note is written with
/// whatever the remaining chunks produced.
pub async fn execute_process<L>(
    args: ProcessArgs,
    extractor: &JudgmentExtractor<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
{
    let input = Path::new(&args.file);
    let text = fs::read_to_string(input)?;

    let output_path = match args.output {
        Some(path) => path,
        None => default_output_path(input)?,
    };

    let result = extractor.process(&text).await;

    for failure in &result.failures {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Chunk {} failed: {}",
                failure.chunk_index, failure.reason
            ))
        );
    }

    fs::write(&output_path, result.record.to_json()?)?;

    println!("{}", formatter.format_record(&result.record, &output_path)?);

    Ok(())
}

/// Derive the output path from the input path by swapping the extension.
fn default_output_path(input: &Path) -> Result<String> {
    let stem = input.file_stem().ok_or_else(|| {
        CliError::InvalidInput(format!("Invalid input path: {}", input.display()))
    })?;
    let path = input.with_file_name(format!("{}.json", stem.to_string_lossy()));
    Ok(path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PipelineOverrides;
    use crate::config::OutputFormat;
    use casenote_extractor::ExtractorConfig;
    use casenote_llm::MockProvider;

    const PAYLOAD: &str = r#"{
        "citations": ["Rex v. Crown, 2019"],
        "facts": ["The appellant filed the appeal late."],
        "statutes": {"acts": ["Limitation Act, 1963"], "sections": [], "articles": []},
        "precedents": [],
        "ratio": [],
        "rulings": ["Appeal dismissed."]
    }"#;

    fn mock_extractor(payload: &str) -> JudgmentExtractor<MockProvider> {
        JudgmentExtractor::new(MockProvider::new(payload), ExtractorConfig::default())
            .with_model_name("mock")
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("data/judgment_01.txt")).unwrap();
        assert_eq!(path, "data/judgment_01.json");
    }

    #[tokio::test]
    async fn test_process_writes_case_note() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("judgment.txt");
        fs::write(&input, "The court heard the appeal. It was dismissed.").unwrap();

        let args = ProcessArgs {
            file: input.to_string_lossy().into_owned(),
            output: None,
            overrides: PipelineOverrides::default(),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_process(args, &mock_extractor(PAYLOAD), &formatter)
            .await
            .unwrap();

        let note_path = dir.path().join("judgment.json");
        let contents = fs::read_to_string(note_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["citations"][0], "Rex v. Crown, 2019");
        assert_eq!(json["statutes"]["acts"][0], "Limitation Act, 1963");
    }

    #[tokio::test]
    async fn test_process_honors_output_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("judgment.txt");
        let output = dir.path().join("note.json");
        fs::write(&input, "A short judgment.").unwrap();

        let args = ProcessArgs {
            file: input.to_string_lossy().into_owned(),
            output: Some(output.to_string_lossy().into_owned()),
            overrides: PipelineOverrides::default(),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_process(args, &mock_extractor(PAYLOAD), &formatter)
            .await
            .unwrap();

        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_process_missing_file_errors() {
        let args = ProcessArgs {
            file: "/nonexistent/judgment.txt".to_string(),
            output: None,
            overrides: PipelineOverrides::default(),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_process(args, &mock_extractor(PAYLOAD), &formatter).await;
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
