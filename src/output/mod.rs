use anyhow::Result;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::transcript::TranscriptRecord;

pub mod formatters;

pub use formatters::*;

/// Save a transcript record to file
pub async fn save_to_file(
    record: &TranscriptRecord,
    path: &Path,
    format: &OutputFormat,
) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_as_text(record),
        OutputFormat::Json => format_as_json(record)?,
    };

    fs_err::write(path, content)?;
    Ok(())
}

/// Print a transcript record to console
pub fn print_to_console(record: &TranscriptRecord, format: &OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Text => format_as_text(record),
        OutputFormat::Json => format_as_json(record)?,
    };

    println!("{}", content);
    Ok(())
}
