//! Per-field ordering of in-flight validations.
//!
//! Every validation run takes a ticket for its field before it awaits the
//! service. Taking a new ticket, or invalidating the field, makes all older
//! tickets stale, and a stale run must not touch the view when it resumes.
//! Replies can therefore arrive in any order without an older one
//! overwriting a newer result.

use models::Field;

use std::sync::atomic::{AtomicU64, Ordering};

/// Proof that a validation run was started; compare with [`FieldTickets::is_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTicket {
    field: Field,
    generation: u64,
}

impl ValidationTicket {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct FieldTickets {
    long: AtomicU64,
    short: AtomicU64,
}

impl FieldTickets {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, field: Field) -> &AtomicU64 {
        match field {
            Field::Long => &self.long,
            Field::Short => &self.short,
        }
    }

    /// Start a new run for `field`, superseding every earlier ticket.
    pub fn issue(&self, field: Field) -> ValidationTicket {
        let generation = self.counter(field).fetch_add(1, Ordering::SeqCst) + 1;
        ValidationTicket { field, generation }
    }

    /// Supersede every outstanding ticket for `field` without starting a run.
    pub fn invalidate(&self, field: Field) {
        self.counter(field).fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: &ValidationTicket) -> bool {
        self.counter(ticket.field).load(Ordering::SeqCst) == ticket.generation
    }
}
