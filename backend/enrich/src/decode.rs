//! Tolerant decoding of the provider's structured response.

use linkdrop_core::AiEnrichment;

/// Decoded completion: either validated structured output, or the raw text
/// when the payload could not be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Structured(AiEnrichment),
    Malformed(String),
}

/// Decode a completion response into title + summary.
///
/// The remote service sometimes wraps the JSON object in prose or code
/// fences, so decoding slices from the first `{` to the last `}` before
/// parsing. Anything that fails to parse, or parses without a non-empty
/// title and summary, is `Malformed`.
pub fn decode_completion(raw: &str) -> CompletionOutcome {
    let trimmed = raw.trim();

    let candidate = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => return CompletionOutcome::Malformed(trimmed.to_string()),
    };

    match serde_json::from_str::<AiEnrichment>(candidate) {
        Ok(enrichment)
            if !enrichment.title.trim().is_empty() && !enrichment.summary.trim().is_empty() =>
        {
            CompletionOutcome::Structured(AiEnrichment {
                title: enrichment.title.trim().to_string(),
                summary: enrichment.summary.trim().to_string(),
            })
        }
        _ => CompletionOutcome::Malformed(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_json() {
        let raw = r#"{"title": "A Short Title", "summary": "One sentence."}"#;
        let CompletionOutcome::Structured(e) = decode_completion(raw) else {
            panic!("expected structured outcome");
        };
        assert_eq!(e.title, "A Short Title");
        assert_eq!(e.summary, "One sentence.");
    }

    #[test]
    fn decodes_json_wrapped_in_prose() {
        let raw = "Sure! Here is the JSON you asked for:\n```json\n\
                   {\"title\": \"Wrapped\", \"summary\": \"Still fine.\"}\n```";
        let CompletionOutcome::Structured(e) = decode_completion(raw) else {
            panic!("expected structured outcome");
        };
        assert_eq!(e.title, "Wrapped");
    }

    #[test]
    fn non_json_text_is_malformed() {
        let raw = "This page is about birds.";
        assert_eq!(
            decode_completion(raw),
            CompletionOutcome::Malformed("This page is about birds.".to_string())
        );
    }

    #[test]
    fn missing_summary_is_malformed() {
        let raw = r#"{"title": "Only a title"}"#;
        assert!(matches!(decode_completion(raw), CompletionOutcome::Malformed(_)));
    }

    #[test]
    fn empty_fields_are_malformed() {
        let raw = r#"{"title": "  ", "summary": "x"}"#;
        assert!(matches!(decode_completion(raw), CompletionOutcome::Malformed(_)));
    }
}
