use anyhow::Result;

use crate::transcript::TranscriptRecord;

/// Render the bare transcript text
pub fn format_as_text(record: &TranscriptRecord) -> String {
    record.transcript_text.clone()
}

/// Render the full record as pretty-printed JSON
pub fn format_as_json(record: &TranscriptRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TranscriptRecord {
        TranscriptRecord {
            transcript_text: "Hello world".to_string(),
            video_url: Some("https://v/1".to_string()),
            character_count: 11,
            word_count: 2,
        }
    }

    #[test]
    fn test_text_format_is_bare_transcript() {
        assert_eq!(format_as_text(&record()), "Hello world");
    }

    #[test]
    fn test_json_format_includes_counts() {
        let json = format_as_json(&record()).unwrap();
        assert!(json.contains("\"transcript_text\": \"Hello world\""));
        assert!(json.contains("\"character_count\": 11"));
        assert!(json.contains("\"word_count\": 2"));
        assert!(json.contains("\"video_url\": \"https://v/1\""));
    }
}
