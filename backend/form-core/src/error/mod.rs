pub mod availability;
pub mod config;

pub use availability::AvailabilityError;
pub use config::ConfigError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
