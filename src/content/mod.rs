//! Content kinds
//!
//! Each submodule defines one generator: its item type, storage key,
//! prompts, sampling parameters, share payload, and post-processing.
//! The kinds share a common identity scheme (UUID v4 plus an RFC 3339
//! timestamp) and the bounded store in [`crate::storage`].

pub mod condoleance;
pub mod cv;
pub mod draaiboek;
pub mod excuus;
pub mod fobie;
pub mod haiku;
pub mod levensles;
pub mod tongbreker;

use chrono::{SecondsFormat, Utc};
use clap::ValueEnum;
use std::fmt;

/// The eight content kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    Tongbreker,
    Condoleance,
    Fobie,
    Draaiboek,
    Excuus,
    Haiku,
    Cv,
    Levensles,
}

impl ContentKind {
    /// All kinds, in presentation order
    pub const ALL: [ContentKind; 8] = [
        ContentKind::Tongbreker,
        ContentKind::Condoleance,
        ContentKind::Fobie,
        ContentKind::Draaiboek,
        ContentKind::Excuus,
        ContentKind::Haiku,
        ContentKind::Cv,
        ContentKind::Levensles,
    ];

    /// Storage key naming the history file for this kind
    pub fn storage_key(self) -> &'static str {
        match self {
            ContentKind::Tongbreker => tongbreker::STORAGE_KEY,
            ContentKind::Condoleance => condoleance::STORAGE_KEY,
            ContentKind::Fobie => fobie::STORAGE_KEY,
            ContentKind::Draaiboek => draaiboek::STORAGE_KEY,
            ContentKind::Excuus => excuus::STORAGE_KEY,
            ContentKind::Haiku => haiku::STORAGE_KEY,
            ContentKind::Cv => cv::STORAGE_KEY,
            ContentKind::Levensles => levensles::STORAGE_KEY,
        }
    }

    /// Query parameter carrying share tokens for this kind
    ///
    /// Tongbrekers and levenslessen cannot be shared.
    pub fn share_param(self) -> Option<&'static str> {
        match self {
            ContentKind::Tongbreker => None,
            ContentKind::Condoleance => Some("c"),
            ContentKind::Fobie => Some("f"),
            ContentKind::Draaiboek => Some("d"),
            ContentKind::Excuus => Some("e"),
            ContentKind::Haiku => Some("h"),
            ContentKind::Cv => Some("cv"),
            ContentKind::Levensles => None,
        }
    }

    /// Human-readable name used in messages and list headers
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Tongbreker => "tongbreker",
            ContentKind::Condoleance => "condoleance",
            ContentKind::Fobie => "fobie",
            ContentKind::Draaiboek => "draaiboek",
            ContentKind::Excuus => "excuus",
            ContentKind::Haiku => "haiku",
            ContentKind::Cv => "cv",
            ContentKind::Levensles => "levensles",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fresh item identifier
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time in the same format `Date.toISOString()` produces
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Strip one leading and one trailing quote, if present
///
/// Models like to wrap short completions in quotes.
pub(crate) fn strip_surrounding_quotes(text: &str) -> String {
    const QUOTES: &[char] = &['"', '\''];
    let text = text.strip_prefix(QUOTES).unwrap_or(text);
    let text = text.strip_suffix(QUOTES).unwrap_or(text);
    text.to_string()
}

/// Single-line preview of an item body for list output
pub(crate) fn snippet(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let truncated: String = flat.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_distinct() {
        let mut keys: Vec<&str> = ContentKind::ALL.iter().map(|k| k.storage_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ContentKind::ALL.len());
    }

    #[test]
    fn test_share_params() {
        assert_eq!(ContentKind::Tongbreker.share_param(), None);
        assert_eq!(ContentKind::Levensles.share_param(), None);
        assert_eq!(ContentKind::Condoleance.share_param(), Some("c"));
        assert_eq!(ContentKind::Haiku.share_param(), Some("h"));
        assert_eq!(ContentKind::Cv.share_param(), Some("cv"));
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(ContentKind::Draaiboek.to_string(), "draaiboek");
    }

    #[test]
    fn test_strip_surrounding_quotes() {
        assert_eq!(strip_surrounding_quotes("\"tekst\""), "tekst");
        assert_eq!(strip_surrounding_quotes("'tekst'"), "tekst");
        assert_eq!(strip_surrounding_quotes("\"tekst"), "tekst");
        assert_eq!(strip_surrounding_quotes("tekst"), "tekst");
        assert_eq!(strip_surrounding_quotes("zeg \"hoi\" terug"), "zeg \"hoi\" terug");
    }

    #[test]
    fn test_snippet_truncates_and_flattens() {
        assert_eq!(snippet("korte tekst", 60), "korte tekst");
        assert_eq!(snippet("regel een\nregel twee", 60), "regel een regel twee");
        let long = "woord ".repeat(30);
        let s = snippet(&long, 20);
        assert!(s.ends_with("..."));
        assert!(s.chars().count() <= 23);
    }

    #[test]
    fn test_now_rfc3339_shape() {
        let ts = now_rfc3339();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
