//! Shared primitives for shorty-form.
//!
//! This crate holds the small building blocks every other crate leans on:
//! source-location tracking for errors and a typed HTTP status code.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing and wire primitives
//! - **models**: Pure form-state data structures
//! - **form-core**: Validation logic operating on models
//! - **shorty-form** / **shorty-check**: Front-ends wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
