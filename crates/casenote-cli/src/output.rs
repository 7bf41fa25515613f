//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use casenote_domain::JudgmentRecord;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a processed record for display.
    ///
    /// Table mode renders per-component counts followed by the output path.
    /// JSON mode prints the full case note, and quiet mode prints only the
    /// output path.
    pub fn format_record(&self, record: &JudgmentRecord, output_path: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(record.to_json()?),
            OutputFormat::Quiet => Ok(output_path.to_string()),
            OutputFormat::Table => {
                let table = self.format_record_table(record);
                let status = self.success(&format!("Wrote case note: {}", output_path));
                Ok(format!("{}\n{}", table, status))
            }
        }
    }

    /// Format the record as a summary table of component counts.
    fn format_record_table(&self, record: &JudgmentRecord) -> String {
        if record.is_empty() {
            return self.colorize("No components extracted.", "yellow");
        }

        let citations = record.citations().len().to_string();
        let facts = record.facts().len().to_string();
        let statutes = record.statutes().len().to_string();
        let precedents = record.precedents().len().to_string();
        let ratio = record.ratio().len().to_string();
        let rulings = record.rulings().len().to_string();

        let mut builder = Builder::default();
        builder.push_record(["Component", "Count"]);
        builder.push_record(["Citations", &citations]);
        builder.push_record(["Facts", &facts]);
        builder.push_record(["Statutes", &statutes]);
        builder.push_record(["Precedents", &precedents]);
        builder.push_record(["Ratio", &ratio]);
        builder.push_record(["Rulings", &rulings]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a batch run summary.
    pub fn batch_summary(&self, processed: usize, failed: usize) -> String {
        if failed == 0 {
            self.success(&format!("Processed {} file(s)", processed))
        } else {
            self.warning(&format!(
                "Processed {} file(s), {} failed",
                processed, failed
            ))
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> JudgmentRecord {
        let mut record = JudgmentRecord::new();
        record.add_citation("Rex v. Crown, 2019");
        record.add_fact("The appellant filed the appeal late.");
        record.add_statute("acts", "Limitation Act, 1963");
        record.add_statute("sections", "Section 5");
        record.add_ruling("Appeal dismissed.");
        record.finalize();
        record
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_record(&create_test_record(), "note.json")
            .unwrap();
        assert!(output.contains("citations"));
        assert!(output.contains("Rex v. Crown, 2019"));
        assert!(!output.contains("note.json"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_record(&create_test_record(), "note.json")
            .unwrap();
        assert_eq!(output, "note.json");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_record(&create_test_record(), "note.json")
            .unwrap();
        assert!(output.contains("Component"));
        assert!(output.contains("Citations"));
        assert!(output.contains("Statutes"));
        assert!(output.contains("Wrote case note: note.json"));
    }

    #[test]
    fn test_empty_record_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let record = JudgmentRecord::new();
        let output = formatter.format_record(&record, "note.json").unwrap();
        assert!(output.contains("No components extracted."));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }

    #[test]
    fn test_batch_summary() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.batch_summary(2, 0), "✓ Processed 2 file(s)");
        assert_eq!(
            formatter.batch_summary(1, 1),
            "⚠ Processed 1 file(s), 1 failed"
        );
    }
}
