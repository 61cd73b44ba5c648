//! Human-readable texts shown next to a rejected field.

use serde::{Deserialize, Serialize};

const MIN_LENGTH_PLACEHOLDER: &str = "{min}";

/// Static mapping from rejection kind to the text shown to the user.
///
/// Every entry can be overridden from configuration; missing entries fall back
/// to the defaults below. `too_short` may contain `{min}`, which is replaced by
/// the configured minimum slug length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default = "default_too_short")]
    pub too_short: String,
    #[serde(default = "default_already_used")]
    pub already_used: String,
    #[serde(default = "default_unacceptable_chars")]
    pub unacceptable_chars: String,
    /// Used when the service refuses a long URL without explaining why.
    #[serde(default = "default_long_rejected")]
    pub long_rejected: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            too_short: default_too_short(),
            already_used: default_already_used(),
            unacceptable_chars: default_unacceptable_chars(),
            long_rejected: default_long_rejected(),
        }
    }
}

impl MessageCatalog {
    pub fn too_short(&self, min_length: usize) -> String {
        self.too_short
            .replace(MIN_LENGTH_PLACEHOLDER, &min_length.to_string())
    }
}

fn default_too_short() -> String {
    "URL too short (at least {min} characters)".to_string()
}
fn default_already_used() -> String {
    "This URL is already in use".to_string()
}
fn default_unacceptable_chars() -> String {
    "Only use the chars a-z, A-Z, 0-9, -, _".to_string()
}
fn default_long_rejected() -> String {
    "This is no valid url to store.".to_string()
}
