use super::CaptionTrack;
use crate::ScrapeError;

/// Pick one caption track under the language-preference policy
///
/// Preference order dominates track order: the first preferred code with
/// any matching track wins, and among matching tracks the earliest in
/// source order is taken. When nothing matches, the first track is
/// returned - a transcript in any language beats none.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    preferred: &[String],
) -> Result<&'a CaptionTrack, ScrapeError> {
    if tracks.is_empty() {
        return Err(ScrapeError::EmptySourceList);
    }

    for language in preferred {
        if let Some(track) = tracks.iter().find(|t| &t.language_code == language) {
            return Ok(track);
        }
    }

    Ok(&tracks[0])
}
