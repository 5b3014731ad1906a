use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::ScrapeError;

/// The final transcript record for one video
///
/// Counts are always recomputed from `transcript_text`, so they cannot
/// drift from the text they describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Normalized transcript: no newlines, no double spaces, trimmed
    pub transcript_text: String,

    /// Source video URL, echoed when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// Unicode character count of the transcript text
    pub character_count: usize,

    /// Whitespace-delimited token count of the transcript text
    pub word_count: usize,
}

/// Assemble a transcript record from a fetched caption track document
///
/// Pulls the text content of every `<text>` element in document order,
/// joins the fragments, and collapses all whitespace runs to single
/// spaces. Timing attributes are discarded.
pub fn assemble(
    track_body: &str,
    video_url: Option<&str>,
) -> Result<TranscriptRecord, ScrapeError> {
    let fragments = collect_text_fragments(track_body);

    if fragments.is_empty() {
        return Err(ScrapeError::NoTextFragments);
    }

    let transcript_text = normalize_whitespace(&fragments.join(" "));
    if transcript_text.is_empty() {
        return Err(ScrapeError::NoTextFragments);
    }

    let character_count = transcript_text.chars().count();
    let word_count = transcript_text.split_whitespace().count();

    Ok(TranscriptRecord {
        transcript_text,
        video_url: video_url.map(|u| u.to_string()),
        character_count,
        word_count,
    })
}

/// Collect the text content of every `<text>` element in document order
///
/// Entities are unescaped by the reader. A parse error stops collection at
/// that point rather than failing the run; whatever was readable up to the
/// error still counts.
fn collect_text_fragments(track_body: &str) -> Vec<String> {
    let mut reader = Reader::from_str(track_body);
    reader.config_mut().trim_text(true);

    let mut fragments = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"text" => in_text = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"text" => in_text = false,
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().unwrap_or_default().to_string();
                if !text.is_empty() {
                    fragments.push(text);
                }
            }
            Ok(Event::CData(e)) if in_text => {
                fragments.push(String::from_utf8_lossy(&e.into_inner()).into_owned());
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!("Caption document truncated by parse error: {}", e);
                break;
            }
            _ => {}
        }
    }

    fragments
}

/// Collapse every whitespace run (including newlines) into a single space
/// and trim the ends
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
