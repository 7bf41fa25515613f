//! Parse LLM output into chunk extractions

use crate::error::ExtractorError;
use crate::types::{ChunkExtraction, StatuteEntry};
use casenote_domain::StatuteCategory;
use serde_json::Value;
use tracing::warn;

/// Parse one model response into a chunk extraction
///
/// Parsing is tolerant per field: a missing or wrongly-typed category is
/// logged and yields nothing, while the other categories still merge. Only a
/// response that is not a JSON object at all is an error.
pub fn parse_chunk_response(response: &str) -> Result<ChunkExtraction, ExtractorError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    Ok(ChunkExtraction {
        citations: string_list(obj.get("citations"), "citations"),
        facts: string_list(obj.get("facts"), "facts"),
        statutes: statute_entries(obj.get("statutes")),
        precedents: string_list(obj.get("precedents"), "precedents"),
        ratio: string_list(obj.get("ratio"), "ratio"),
        rulings: string_list(obj.get("rulings"), "rulings"),
    })
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```json") || trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Read a string array field, skipping anything malformed
fn string_list(value: Option<&Value>, field: &str) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    let Some(items) = value.as_array() else {
        warn!("Field '{}' is not an array, skipping", field);
        return Vec::new();
    };

    let mut list = Vec::new();
    for item in items {
        match item.as_str() {
            Some(text) => list.push(text.to_string()),
            None => warn!("Skipping non-string item in '{}'", field),
        }
    }
    list
}

/// Read the statutes field, which may be a category mapping or, per legacy
/// payloads, a flat list filed under the fallback category
fn statute_entries(value: Option<&Value>) -> Vec<StatuteEntry> {
    let Some(value) = value else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    match value {
        Value::Object(map) => {
            for (category, list) in map {
                let Some(items) = list.as_array() else {
                    warn!("Statute category '{}' is not an array, skipping", category);
                    continue;
                };
                for item in items {
                    match item.as_str() {
                        Some(text) => entries.push(StatuteEntry {
                            category: category.clone(),
                            value: text.to_string(),
                        }),
                        None => warn!("Skipping non-string statute in '{}'", category),
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item.as_str() {
                    Some(text) => entries.push(StatuteEntry {
                        category: StatuteCategory::FALLBACK.as_str().to_string(),
                        value: text.to_string(),
                    }),
                    None => warn!("Skipping non-string statute in flat list"),
                }
            }
        }
        _ => {
            warn!("Field 'statutes' is neither a mapping nor a list, skipping");
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let response = r#"{
            "citations": ["X v. Y, 2020"],
            "facts": ["A contract was signed."],
            "statutes": {
                "acts": ["Contract Act, 1872"],
                "sections": ["Section 73"],
                "articles": []
            },
            "precedents": ["P v. Q, 1999"],
            "ratio": ["Damages follow the breach."],
            "rulings": ["Suit decreed."]
        }"#;

        let extraction = parse_chunk_response(response).unwrap();
        assert_eq!(extraction.citations, ["X v. Y, 2020"]);
        assert_eq!(extraction.facts, ["A contract was signed."]);
        assert_eq!(extraction.statutes.len(), 2);
        assert_eq!(extraction.precedents, ["P v. Q, 1999"]);
        assert_eq!(extraction.ratio, ["Damages follow the breach."]);
        assert_eq!(extraction.rulings, ["Suit decreed."]);
    }

    #[test]
    fn test_parse_payload_with_markdown_wrapper() {
        let response = r#"```json
{
    "citations": ["X v. Y, 2020"],
    "facts": []
}
```"#;

        let extraction = parse_chunk_response(response).unwrap();
        assert_eq!(extraction.citations, ["X v. Y, 2020"]);
    }

    #[test]
    fn test_missing_fields_yield_empty_categories() {
        let extraction = parse_chunk_response("{}").unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_statutes_as_flat_list_use_fallback_category() {
        let response = r#"{"statutes": ["Evidence Act", "Article 21"]}"#;

        let extraction = parse_chunk_response(response).unwrap();
        assert_eq!(extraction.statutes.len(), 2);
        for entry in &extraction.statutes {
            assert_eq!(entry.category, "acts");
        }
    }

    #[test]
    fn test_statute_mapping_keeps_payload_labels() {
        let response = r#"{"statutes": {"schedules": ["Seventh Schedule"]}}"#;

        let extraction = parse_chunk_response(response).unwrap();
        assert_eq!(extraction.statutes.len(), 1);
        // Label is preserved here; the record resolves it on merge.
        assert_eq!(extraction.statutes[0].category, "schedules");
    }

    #[test]
    fn test_wrong_typed_field_skipped_others_kept() {
        let response = r#"{
            "citations": "not an array",
            "statutes": 7,
            "rulings": ["Appeal allowed."]
        }"#;

        let extraction = parse_chunk_response(response).unwrap();
        assert!(extraction.citations.is_empty());
        assert!(extraction.statutes.is_empty());
        assert_eq!(extraction.rulings, ["Appeal allowed."]);
    }

    #[test]
    fn test_non_string_items_skipped() {
        let response = r#"{"citations": ["X v. Y, 2020", 42, null]}"#;

        let extraction = parse_chunk_response(response).unwrap();
        assert_eq!(extraction.citations, ["X v. Y, 2020"]);
    }

    #[test]
    fn test_non_json_response_is_error() {
        let result = parse_chunk_response("This is not JSON");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_non_object_response_is_error() {
        let result = parse_chunk_response("[1, 2, 3]");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        let result = extract_json(json).unwrap();
        assert_eq!(result, json);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = r#"```
{"key": "value"}
```"#;
        let result = extract_json(response).unwrap();
        assert!(result.contains("key"));
    }
}
