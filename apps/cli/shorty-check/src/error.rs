use common::ErrorLocation;

use thiserror::Error;

/// Errors that stop a check before any field could be validated.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration could not be located, loaded, validated or saved
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The availability client could not be built
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },

    /// Logging could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Nothing to check
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}
