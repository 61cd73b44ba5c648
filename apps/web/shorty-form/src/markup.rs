//! Element ids and presentation values the page markup provides.

use models::field::state::{INVALID_CLASS, VALID_CLASS};
use models::{Field, Validity};

/// Label in front of the custom slug input.
pub const URL_PREFIX_ID: &str = "url-prefix";

/// "Provide short url" checkbox.
pub const PROVIDE_SHORT_URL_ID: &str = "provide-short-url";

pub const MESSAGE_SHOWN_DISPLAY: &str = "block";
pub const MESSAGE_HIDDEN_DISPLAY: &str = "none";

pub const DISPLAY_PROPERTY: &str = "display";

/// Inline `display` value for a field's message paragraph.
pub const fn message_display(visible: bool) -> &'static str {
    if visible {
        MESSAGE_SHOWN_DISPLAY
    } else {
        MESSAGE_HIDDEN_DISPLAY
    }
}

/// `document.readyState` while the markup is still being parsed.
pub const LOADING_READY_STATE: &str = "loading";

/// Whether the form's elements can be looked up for the given `readyState`.
pub fn is_document_ready(ready_state: &str) -> bool {
    ready_state != LOADING_READY_STATE
}

/// How one field looks on the page for a given [`Validity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPresentation {
    /// Class added to the input.
    pub add_class: Option<&'static str>,
    /// Classes removed from the input before `add_class` is applied.
    pub remove_classes: &'static [&'static str],
    /// Inline `display` of the field's message paragraph.
    pub message_display: &'static str,
}

/// The input carries at most one of `valid`/`invalid`; only an invalid
/// field shows its message.
pub const fn presentation(validity: Validity) -> FieldPresentation {
    match validity {
        Validity::Unset => FieldPresentation {
            add_class: None,
            remove_classes: &[VALID_CLASS, INVALID_CLASS],
            message_display: message_display(false),
        },
        Validity::Valid => FieldPresentation {
            add_class: Some(VALID_CLASS),
            remove_classes: &[INVALID_CLASS],
            message_display: message_display(false),
        },
        Validity::Invalid => FieldPresentation {
            add_class: Some(INVALID_CLASS),
            remove_classes: &[VALID_CLASS],
            message_display: message_display(true),
        },
    }
}

/// Every id the form binds to, in lookup order.
pub const fn required_ids() -> [&'static str; 6] {
    [
        URL_PREFIX_ID,
        Field::Long.input_id(),
        Field::Long.message_id(),
        PROVIDE_SHORT_URL_ID,
        Field::Short.input_id(),
        Field::Short.message_id(),
    ]
}
