//! Local syntax rules for custom slugs.
//!
//! These run before any availability request so obviously unusable slugs
//! never reach the network.

use std::sync::OnceLock;

use regex::Regex;

const SLUG_CHARSET_PATTERN: &str = r"^[A-Za-z0-9_-]*$";

static SLUG_CHARSET_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_slug_charset_regex() -> &'static Regex {
    SLUG_CHARSET_REGEX.get_or_init(|| Regex::new(SLUG_CHARSET_PATTERN).expect("valid regex pattern"))
}

/// Why a slug was rejected without asking the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugRejection {
    TooShort { min: usize, actual: usize },
    UnacceptableChars,
}

/// Check a slug against the length and character rules.
///
/// Length is tested first: a two-character slug containing `$` is reported
/// as too short.
pub fn check_slug(slug: &str, min_length: usize) -> Result<(), SlugRejection> {
    let actual = slug.chars().count();
    if actual < min_length {
        return Err(SlugRejection::TooShort {
            min: min_length,
            actual,
        });
    }

    if !get_slug_charset_regex().is_match(slug) {
        return Err(SlugRejection::UnacceptableChars);
    }

    Ok(())
}
