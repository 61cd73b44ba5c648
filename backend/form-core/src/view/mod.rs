//! The UI surface the controller drives.
//!
//! A view owns the visible state of both inputs. The browser binding
//! implements it over DOM elements; [`memory::MemoryView`] keeps the state in
//! memory for the CLI and for tests.

pub mod memory;

use models::Field;

/// Presentation operations for the shortening form.
///
/// Methods take `&self`: views are shared between concurrently running
/// validations and use interior mutability.
pub trait FormView {
    /// Show the service prefix in front of the custom slug input.
    fn set_prefix(&self, prefix: &str);

    /// Apply the `valid` class and hide the field's message.
    fn set_valid(&self, field: Field);

    /// Apply the `invalid` class and show `message`.
    fn set_invalid(&self, field: Field, message: &str);

    /// Remove both validity classes and hide the message.
    fn clear(&self, field: Field);

    fn set_enabled(&self, field: Field, enabled: bool);
}
