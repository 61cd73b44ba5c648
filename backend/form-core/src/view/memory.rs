use crate::view::FormView;

use models::{Field, FieldState};

use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default, Clone)]
struct Surface {
    prefix: String,
    long: FieldState,
    short: FieldState,
}

impl Surface {
    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Long => &mut self.long,
            Field::Short => &mut self.short,
        }
    }
}

/// In-memory [`FormView`] that records what a page would display.
#[derive(Debug, Default)]
pub struct MemoryView {
    surface: Mutex<Surface>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Surface> {
        // A panicking writer cannot leave a half-updated FieldState behind.
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Snapshot of one field's visible state.
    pub fn field(&self, field: Field) -> FieldState {
        match field {
            Field::Long => self.lock().long.clone(),
            Field::Short => self.lock().short.clone(),
        }
    }

    /// Record the raw input value, as typing into the field would.
    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        self.lock().field_mut(field).value = value.into();
    }
}

impl FormView for MemoryView {
    fn set_prefix(&self, prefix: &str) {
        self.lock().prefix = prefix.to_string();
    }

    fn set_valid(&self, field: Field) {
        self.lock().field_mut(field).mark_valid();
    }

    fn set_invalid(&self, field: Field, message: &str) {
        self.lock().field_mut(field).mark_invalid(message);
    }

    fn clear(&self, field: Field) {
        self.lock().field_mut(field).clear();
    }

    fn set_enabled(&self, field: Field, enabled: bool) {
        self.lock().field_mut(field).enabled = enabled;
    }
}
