//! Form-state models for shorty-form.
//!
//! Pure data describing the two validated inputs of the shortening form and
//! the texts shown when they are rejected. Nothing here performs I/O.

pub mod catalog;
pub mod field;

pub use catalog::MessageCatalog;
pub use field::state::{FieldState, Validity};
pub use field::Field;
