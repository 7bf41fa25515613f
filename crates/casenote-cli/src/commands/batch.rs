//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::Result;
use crate::output::Formatter;
use casenote_domain::LlmProvider;
use casenote_extractor::JudgmentExtractor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Execute the batch command.
///
/// Scans the input directory for `.txt` files in sorted order, processes up
/// to `max_files` of them, and writes one case note per judgment into the
/// output directory. A file that cannot be read is reported and skipped.
pub async fn execute_batch<L>(
    args: BatchArgs,
    extractor: &JudgmentExtractor<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
{
    let input_dir = Path::new(&args.input_dir);
    let output_dir = Path::new(&args.output_dir);
    fs::create_dir_all(output_dir)?;

    let files = collect_judgment_files(input_dir)?;
    if files.is_empty() {
        println!(
            "{}",
            formatter.warning("No .txt files found in input directory")
        );
        return Ok(());
    }

    let selected = &files[..files.len().min(args.max_files)];
    println!(
        "{}",
        formatter.info(&format!(
            "Processing {} of {} judgment file(s)",
            selected.len(),
            files.len()
        ))
    );

    let mut processed = 0usize;
    let mut failed = 0usize;

    for path in selected {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {}", name, e);
                eprintln!(
                    "{}",
                    formatter.error(&format!("Failed to read {}: {}", name, e))
                );
                failed += 1;
                continue;
            }
        };

        println!("{}", formatter.info(&format!("Processing {}", name)));
        let result = extractor.process(&text).await;

        if !result.failures.is_empty() {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "{}: {} of {} chunks failed",
                    name,
                    result.failures.len(),
                    result.metadata.chunk_count
                ))
            );
        }

        let note = note_path(output_dir, path);
        fs::write(&note, result.record.to_json()?)?;
        println!("{}", formatter.success(&format!("Wrote {}", note.display())));
        processed += 1;
    }

    println!("{}", formatter.batch_summary(processed, failed));
    Ok(())
}

/// Collect `.txt` files from the input directory in sorted order.
fn collect_judgment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Place the case note in the output directory under the judgment's stem.
fn note_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "judgment".to_string());
    output_dir.join(format!("{}.json", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PipelineOverrides;
    use crate::config::OutputFormat;
    use casenote_extractor::ExtractorConfig;
    use casenote_llm::MockProvider;

    fn mock_extractor() -> JudgmentExtractor<MockProvider> {
        let payload = r#"{"citations": ["In re Batch, 2020"]}"#;
        JudgmentExtractor::new(MockProvider::new(payload), ExtractorConfig::default())
            .with_model_name("mock")
    }

    fn batch_args(input: &Path, output: &Path, max_files: usize) -> BatchArgs {
        BatchArgs {
            input_dir: input.to_string_lossy().into_owned(),
            output_dir: output.to_string_lossy().into_owned(),
            max_files,
            overrides: PipelineOverrides::default(),
        }
    }

    #[tokio::test]
    async fn test_batch_respects_file_limit_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(input.join(name), "A judgment text.").unwrap();
        }

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_batch(batch_args(&input, &output, 2), &mock_extractor(), &formatter)
            .await
            .unwrap();

        assert!(output.join("a.json").exists());
        assert!(output.join("b.json").exists());
        assert!(!output.join("c.json").exists());
    }

    #[tokio::test]
    async fn test_batch_ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("judgment.txt"), "A judgment text.").unwrap();
        fs::write(input.join("notes.md"), "Not a judgment.").unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_batch(
            batch_args(&input, &output, 10),
            &mock_extractor(),
            &formatter,
        )
        .await
        .unwrap();

        assert!(output.join("judgment.json").exists());
        assert!(!output.join("notes.json").exists());
    }

    #[tokio::test]
    async fn test_batch_writes_parseable_notes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("case.txt"), "A judgment text.").unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_batch(
            batch_args(&input, &output, 10),
            &mock_extractor(),
            &formatter,
        )
        .await
        .unwrap();

        let contents = fs::read_to_string(output.join("case.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["citations"][0], "In re Batch, 2020");
    }

    #[tokio::test]
    async fn test_batch_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_batch(
            batch_args(&input, &output, 10),
            &mock_extractor(),
            &formatter,
        )
        .await
        .unwrap();

        assert!(output.exists());
        assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_batch_missing_input_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing");
        let output = dir.path().join("out");

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = execute_batch(
            batch_args(&input, &output, 10),
            &mock_extractor(),
            &formatter,
        )
        .await;

        assert!(result.is_err());
    }
}
