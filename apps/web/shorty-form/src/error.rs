use common::ErrorLocation;

use thiserror::Error;

/// Errors raised while binding the form to the page.
#[derive(Debug, Error)]
pub enum WebError {
    /// An element the form needs is absent or of the wrong kind
    #[error("Missing Element Error: #{id} {location}")]
    MissingElement {
        id: &'static str,
        location: ErrorLocation,
    },

    /// A DOM call failed
    #[error("Browser Error: {message} {location}")]
    Browser {
        message: String,
        location: ErrorLocation,
    },

    /// The availability client could not be built
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

#[cfg(target_arch = "wasm32")]
impl WebError {
    #[track_caller]
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        WebError::Browser {
            message: format!("{value:?}"),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(error: WebError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
