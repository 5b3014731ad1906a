use anyhow::{Context, Result};
use std::path::Path;

/// Cookies loaded from a Netscape-format cookie file
///
/// Only name/value pairs are kept; domain and path scoping are left to the
/// server since every request in a run targets the same site.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    pairs: Vec<(String, String)>,
}

impl CookieJar {
    /// Parse Netscape cookie-file text
    ///
    /// Each cookie line has 7 tab-separated fields: domain, include-subdomains
    /// flag, path, secure flag, expiry, name, value. Comment (`#`) and blank
    /// lines are ignored; lines with the wrong field count are skipped.
    pub fn parse(text: &str) -> Self {
        let mut pairs = Vec::new();

        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 7 {
                tracing::debug!("Skipping malformed cookie line ({} fields)", fields.len());
                continue;
            }

            let name = fields[5].trim();
            if name.is_empty() {
                continue;
            }

            pairs.push((name.to_string(), fields[6].trim().to_string()));
        }

        Self { pairs }
    }

    /// Load and parse a cookie file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs_err::read_to_string(path)
            .with_context(|| format!("Failed to read cookie file: {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Render the jar as a `Cookie` request-header value
    pub fn header_value(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }

        Some(
            self.pairs
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
