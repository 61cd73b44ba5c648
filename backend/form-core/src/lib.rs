pub mod availability;
pub mod config;
pub mod controller;
pub mod error;
pub mod slug;
pub mod ticket;
pub mod view;

#[cfg(test)]
mod tests;

pub use availability::{Availability, AvailabilityCheck, AvailabilityClient};
pub use config::FormConfig;
pub use controller::{ControllerSettings, FormController, Rejection, ValidationOutcome};
pub use view::FormView;
pub use view::memory::MemoryView;

pub const SHORTY_DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const SHORTY_DEFAULT_PORT: u16 = 7070;
pub const SHORTY_DEFAULT_BASE_URL: &str =
    const_format::concatcp!("http://", SHORTY_DEFAULT_HOSTNAME, ":", SHORTY_DEFAULT_PORT);
pub const SHORTY_BASE_URL_ENV: &str = "SHORTY_BASE_URL";
pub const DEFAULT_MIN_SLUG_LENGTH: usize = 3;
