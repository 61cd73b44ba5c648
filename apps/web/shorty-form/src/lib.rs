//! Browser binding of the shortening form.
//!
//! Compiled to wasm32 and loaded by the page, this crate looks up the form's
//! elements, builds a [`form_core::FormController`] over them and wires the
//! input and checkbox events to it. Availability checks go to the page's own
//! origin.
//!
//! Only [`error`] and [`markup`] exist on other targets.

pub mod error;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod mount;


#[cfg(target_arch = "wasm32")]
pub use entry::start;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::error::WebError;
    use crate::markup::is_document_ready;
    use crate::mount::mount;

    use common::ErrorLocation;

    use std::panic::Location;

    use log::{LevelFilter, error, info};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::Event;

    /// Entry point run by the wasm-bindgen glue once the module is instantiated.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        crate::console::initialize(LevelFilter::Info);
        info!("shorty-form loaded");

        let window = web_sys::window().ok_or_else(|| WebError::Browser {
            message: "No window object available".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let document = window.document().ok_or_else(|| WebError::Browser {
            message: "No document available".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if is_document_ready(&document.ready_state()) {
            mount(&window)?;
            return Ok(());
        }

        let on_ready: Closure<dyn FnMut(Event)> = Closure::once(move |_event: Event| {
            if let Err(e) = mount(&window) {
                error!("Failed to mount form: {e}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .map_err(WebError::from_js)?;
        on_ready.forget();

        Ok(())
    }
}
