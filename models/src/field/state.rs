use serde::{Deserialize, Serialize};

pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";

/// Visible validity of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    #[default]
    Unset,
    Valid,
    Invalid,
}

impl Validity {
    /// CSS class applied to the input, if any.
    pub const fn css_class(&self) -> Option<&'static str> {
        match self {
            Validity::Unset => None,
            Validity::Valid => Some(VALID_CLASS),
            Validity::Invalid => Some(INVALID_CLASS),
        }
    }
}

/// Transient UI state of one input.
///
/// `message` is only ever `Some` while `validity` is [`Validity::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    validity: Validity,
    message: Option<String>,
    pub enabled: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            validity: Validity::Unset,
            message: None,
            enabled: true,
        }
    }
}

impl FieldState {
    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_message_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn mark_valid(&mut self) {
        self.validity = Validity::Valid;
        self.message = None;
    }

    pub fn mark_invalid(&mut self, message: impl Into<String>) {
        self.validity = Validity::Invalid;
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.validity = Validity::Unset;
        self.message = None;
    }
}
