//! The form controller.
//!
//! Wires the two inputs of the shortening form to the availability service:
//!
//! - the long URL is checked remotely on every change,
//! - the custom slug is checked locally (length, character set) and then
//!   remotely,
//! - the "provide short url" checkbox enables the slug input and re-runs its
//!   validation, or disables it and clears its markers.
//!
//! Every operation returns the [`ValidationOutcome`] it applied so front-ends
//! can report it.

use crate::availability::{Availability, AvailabilityCheck, prefix_label};
use crate::slug::{SlugRejection, check_slug};
use crate::ticket::{FieldTickets, ValidationTicket};
use crate::view::FormView;
use crate::DEFAULT_MIN_SLUG_LENGTH;

use models::{Field, MessageCatalog};

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use url::Url;

/// Why a field ended up invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort { min: usize, actual: usize },
    UnacceptableChars,
    AlreadyUsed,
    /// The service refused a long URL; carries the text shown to the user.
    Refused(String),
}

impl From<SlugRejection> for Rejection {
    fn from(rejection: SlugRejection) -> Self {
        match rejection {
            SlugRejection::TooShort { min, actual } => Rejection::TooShort { min, actual },
            SlugRejection::UnacceptableChars => Rejection::UnacceptableChars,
        }
    }
}

/// What a controller operation did to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Markers removed, message hidden.
    Cleared,
    Valid,
    Invalid(Rejection),
    /// The service could not be reached; the previous state was kept.
    Unchanged,
    /// A newer validation of the same field started while this one waited.
    Superseded,
    /// The custom slug is disabled, nothing was checked.
    Skipped,
}

impl ValidationOutcome {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationOutcome::Invalid(_))
    }
}

/// Static inputs of a [`FormController`].
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    prefix: String,
    min_slug_length: usize,
    messages: MessageCatalog,
}

impl ControllerSettings {
    pub fn new(base_url: &Url) -> Self {
        Self {
            prefix: prefix_label(base_url),
            min_slug_length: DEFAULT_MIN_SLUG_LENGTH,
            messages: MessageCatalog::default(),
        }
    }

    pub fn with_min_slug_length(mut self, min_slug_length: usize) -> Self {
        self.min_slug_length = min_slug_length;
        self
    }

    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn min_slug_length(&self) -> usize {
        self.min_slug_length
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }
}

pub struct FormController<V, C> {
    view: V,
    checker: C,
    settings: ControllerSettings,
    tickets: FieldTickets,
    custom_slug_enabled: AtomicBool,
}

impl<V: FormView, C: AvailabilityCheck> FormController<V, C> {
    pub fn new(view: V, checker: C, settings: ControllerSettings) -> Self {
        Self {
            view,
            checker,
            settings,
            tickets: FieldTickets::new(),
            custom_slug_enabled: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn is_custom_slug_enabled(&self) -> bool {
        self.custom_slug_enabled.load(Ordering::SeqCst)
    }

    /// Prepare the page: prefix label, both fields unvalidated, slug input
    /// enabled according to the checkbox's initial state.
    pub fn initialize(&self, custom_slug_enabled: bool) {
        self.view.set_prefix(self.settings.prefix());
        for field in Field::ALL {
            self.view.clear(field);
        }
        self.custom_slug_enabled
            .store(custom_slug_enabled, Ordering::SeqCst);
        self.view.set_enabled(Field::Short, custom_slug_enabled);
        info!(
            "Form initialized (prefix {}, custom slug {})",
            self.settings.prefix(),
            if custom_slug_enabled { "on" } else { "off" }
        );
    }

    /// Validate the long URL after its input changed.
    pub async fn validate_long(&self, value: &str) -> ValidationOutcome {
        let ticket = self.tickets.issue(Field::Long);

        if value.is_empty() {
            self.view.clear(Field::Long);
            return ValidationOutcome::Cleared;
        }

        let reply = self.checker.check_long(value).await;
        if !self.still_current(&ticket) {
            return ValidationOutcome::Superseded;
        }

        match reply {
            Ok(Availability::Free) => self.apply_valid(Field::Long),
            Ok(Availability::Taken { status, reason }) => {
                debug!("Long URL refused with HTTP {status}");
                let text = if reason.trim().is_empty() {
                    self.settings.messages.long_rejected.clone()
                } else {
                    reason
                };
                self.apply_invalid(Field::Long, Rejection::Refused(text.clone()), &text)
            }
            Err(e) => {
                warn!("Long URL availability check failed: {e}");
                ValidationOutcome::Unchanged
            }
        }
    }

    /// Validate the custom slug after its input changed.
    pub async fn validate_short(&self, value: &str) -> ValidationOutcome {
        if !self.is_custom_slug_enabled() {
            debug!("Custom slug disabled, skipping validation");
            return ValidationOutcome::Skipped;
        }

        let ticket = self.tickets.issue(Field::Short);
        let messages = &self.settings.messages;

        if let Err(rejection) = check_slug(value, self.settings.min_slug_length) {
            let text = match rejection {
                SlugRejection::TooShort { min, .. } => messages.too_short(min),
                SlugRejection::UnacceptableChars => messages.unacceptable_chars.clone(),
            };
            return self.apply_invalid(Field::Short, rejection.into(), &text);
        }

        let reply = self.checker.check_short(value).await;
        if !self.still_current(&ticket) {
            return ValidationOutcome::Superseded;
        }

        match reply {
            Ok(Availability::Free) => self.apply_valid(Field::Short),
            Ok(Availability::Taken { status, .. }) => {
                debug!("Custom slug refused with HTTP {status}");
                self.apply_invalid(Field::Short, Rejection::AlreadyUsed, &messages.already_used)
            }
            Err(e) => {
                warn!("Custom slug availability check failed: {e}");
                ValidationOutcome::Unchanged
            }
        }
    }

    /// React to the "provide short url" checkbox.
    ///
    /// Enabling re-validates `current_value`; disabling supersedes any
    /// in-flight slug check and clears the field's markers.
    pub async fn set_custom_slug_enabled(
        &self,
        enabled: bool,
        current_value: &str,
    ) -> ValidationOutcome {
        self.custom_slug_enabled.store(enabled, Ordering::SeqCst);
        self.view.set_enabled(Field::Short, enabled);

        if enabled {
            return self.validate_short(current_value).await;
        }

        self.tickets.invalidate(Field::Short);
        self.view.clear(Field::Short);
        ValidationOutcome::Cleared
    }

    fn still_current(&self, ticket: &ValidationTicket) -> bool {
        let current = self.tickets.is_current(ticket);
        if !current {
            debug!(
                "Dropping stale {} reply (generation {})",
                ticket.field(),
                ticket.generation()
            );
        }
        current
    }

    fn apply_valid(&self, field: Field) -> ValidationOutcome {
        self.view.set_valid(field);
        info!("{field}: valid");
        ValidationOutcome::Valid
    }

    fn apply_invalid(&self, field: Field, rejection: Rejection, text: &str) -> ValidationOutcome {
        self.view.set_invalid(field, text);
        info!("{field}: invalid ({text})");
        ValidationOutcome::Invalid(rejection)
    }
}
