use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::truncate_snippet;
use crate::ScrapeError;

pub mod select;

pub use select::select_track;

/// Assignment statement that introduces the embedded player config
pub const PLAYER_RESPONSE_MARKER: &str = "var ytInitialPlayerResponse";

/// A single caption track from the player config
///
/// Tracks keep the order they appear in on the page; that order is the
/// tie-break when no preferred language matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub language_code: String,
    pub base_url: String,
}

/// The slice of the player config this scraper cares about
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub caption_tracks: Vec<CaptionTrack>,
}

/// Extract the caption track list from a fetched page body
///
/// Carves the embedded player config out of the page markup, parses it as
/// JSON, and walks the fixed `captions` → `playerCaptionsTracklistRenderer`
/// → `captionTracks` path. Track entries missing a language code or base
/// URL are skipped.
pub fn extract(page_body: &str) -> Result<PlayerConfig, ScrapeError> {
    let candidate = carve_player_json(page_body)?;

    let parsed: Value = serde_json::from_str(candidate).map_err(|e| {
        ScrapeError::MalformedPayload(format!("{} (near: {})", e, truncate_snippet(candidate, 80)))
    })?;

    let tracks = parsed
        .get("captions")
        .and_then(|c| c.get("playerCaptionsTracklistRenderer"))
        .and_then(|r| r.get("captionTracks"))
        .and_then(|t| t.as_array())
        .ok_or(ScrapeError::NoCaptionTracks)?;

    let caption_tracks: Vec<CaptionTrack> = tracks
        .iter()
        .filter_map(|track| serde_json::from_value(track.clone()).ok())
        .collect();

    if caption_tracks.is_empty() {
        return Err(ScrapeError::NoCaptionTracks);
    }

    Ok(PlayerConfig { caption_tracks })
}

/// Carve the player config object literal out of the surrounding markup
///
/// Anchors on the known assignment marker only; everything around it is
/// noise. Returns the candidate substring without judging whether it
/// parses - an unterminated object yields the remaining tail so the parse
/// step can reject it as malformed.
fn carve_player_json(page_body: &str) -> Result<&str, ScrapeError> {
    let marker_at = page_body
        .find(PLAYER_RESPONSE_MARKER)
        .ok_or(ScrapeError::MarkerNotFound)?;

    let rest = page_body[marker_at + PLAYER_RESPONSE_MARKER.len()..]
        .trim_start()
        .trim_start_matches('=')
        .trim_start();

    if !rest.starts_with('{') {
        return Ok(rest);
    }

    Ok(delimit_object(rest))
}

/// Find the end of the object literal starting at the first byte of `s`
///
/// Brace counting is aware of JSON strings and escapes so braces inside
/// string values do not end the object early. If the braces never balance,
/// the whole remainder is returned.
fn delimit_object(s: &str) -> &str {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(config: &str) -> String {
        format!(
            "<html><script>window.x = 1;</script><script>var ytInitialPlayerResponse = {};var meta = {{}};</script></html>",
            config
        )
    }

    const TWO_TRACKS: &str = r#"{"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"languageCode":"fr","baseUrl":"https://x/fr"},{"languageCode":"en","baseUrl":"https://x/en"}]}}}"#;

    #[test]
    fn test_extract_returns_tracks_in_source_order() {
        let config = extract(&page_with(TWO_TRACKS)).unwrap();
        assert_eq!(config.caption_tracks.len(), 2);
        assert_eq!(config.caption_tracks[0].language_code, "fr");
        assert_eq!(config.caption_tracks[0].base_url, "https://x/fr");
        assert_eq!(config.caption_tracks[1].language_code, "en");
    }

    #[test]
    fn test_extract_fails_without_marker() {
        let result = extract("<html><script>var something = {};</script></html>");
        assert!(matches!(result, Err(ScrapeError::MarkerNotFound)));
    }

    #[test]
    fn test_extract_fails_on_truncated_braces() {
        let page = "var ytInitialPlayerResponse = {\"captions\":{\"playerCaptions";
        let result = extract(page);
        assert!(matches!(result, Err(ScrapeError::MalformedPayload(_))));
    }

    #[test]
    fn test_extract_fails_on_non_object_payload() {
        let result = extract("var ytInitialPlayerResponse = null;");
        assert!(matches!(result, Err(ScrapeError::MalformedPayload(_))));
    }

    #[test]
    fn test_extract_fails_without_caption_path() {
        let result = extract(&page_with(r#"{"videoDetails":{"title":"t"}}"#));
        assert!(matches!(result, Err(ScrapeError::NoCaptionTracks)));
    }

    #[test]
    fn test_extract_skips_tracks_missing_fields() {
        let config = r#"{"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"languageCode":"de"},{"baseUrl":"https://x/no-lang"},{"languageCode":"en","baseUrl":"https://x/en"}]}}}"#;
        let parsed = extract(&page_with(config)).unwrap();
        assert_eq!(parsed.caption_tracks.len(), 1);
        assert_eq!(parsed.caption_tracks[0].language_code, "en");
    }

    #[test]
    fn test_extract_fails_when_all_tracks_unusable() {
        let config = r#"{"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"languageCode":"de"},{"name":"x"}]}}}"#;
        let result = extract(&page_with(config));
        assert!(matches!(result, Err(ScrapeError::NoCaptionTracks)));
    }

    #[test]
    fn test_carve_ignores_braces_inside_strings() {
        let config = r#"{"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"languageCode":"en","baseUrl":"https://x/en?note={a}"}]}}}"#;
        let parsed = extract(&page_with(config)).unwrap();
        assert_eq!(parsed.caption_tracks[0].base_url, "https://x/en?note={a}");
    }

    #[test]
    fn test_carve_stops_at_statement_boundary() {
        let page = page_with(r#"{"a":1}"#);
        let carved = carve_player_json(&page).unwrap();
        assert_eq!(carved, r#"{"a":1}"#);
    }
}
