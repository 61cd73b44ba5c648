pub mod state;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// One of the two validated inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The long URL to shorten.
    Long,
    /// The optional custom slug.
    Short,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Long, Field::Short];

    /// Element id of the input on the page.
    pub const fn input_id(&self) -> &'static str {
        match self {
            Field::Long => "long-url",
            Field::Short => "short-url",
        }
    }

    /// Element id of the paragraph holding the field's validity message.
    pub const fn message_id(&self) -> &'static str {
        match self {
            Field::Long => "long-validity-message",
            Field::Short => "short-validity-message",
        }
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            Field::Long => write!(formatter, "long url"),
            Field::Short => write!(formatter, "custom slug"),
        }
    }
}
