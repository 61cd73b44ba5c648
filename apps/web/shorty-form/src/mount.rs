use crate::dom::{DomFormView, lookup};
use crate::error::WebError;
use crate::markup::PROVIDE_SHORT_URL_ID;

use form_core::{AvailabilityClient, ControllerSettings, FormController};

use common::ErrorLocation;
use models::Field;

use std::panic::Location;
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, Window};

type PageController = FormController<DomFormView, AvailabilityClient>;

/// Bind the controller to the page and register its event handlers.
///
/// Handlers live for the rest of the page session.
pub(crate) fn mount(window: &Window) -> Result<(), WebError> {
    let document = window.document().ok_or_else(|| WebError::Browser {
        message: "No document available".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let origin = window.location().origin().map_err(WebError::from_js)?;

    let view = DomFormView::locate(&document)?;
    let checkbox: HtmlInputElement = lookup(&document, PROVIDE_SHORT_URL_ID)?;

    let client = AvailabilityClient::new(&origin).map_err(|e| WebError::Client {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let settings = ControllerSettings::new(client.base_url());
    let controller: Rc<PageController> = Rc::new(FormController::new(view, client, settings));

    controller.initialize(checkbox.checked());

    let long_input = controller.view().input(Field::Long).clone();
    let short_input = controller.view().input(Field::Short).clone();

    listen(&long_input, "input", {
        let controller = Rc::clone(&controller);
        let long_input = long_input.clone();
        move || {
            let controller = Rc::clone(&controller);
            let value = long_input.value();
            spawn_local(async move {
                controller.validate_long(&value).await;
            });
        }
    })?;

    listen(&short_input, "input", {
        let controller = Rc::clone(&controller);
        let short_input = short_input.clone();
        move || {
            let controller = Rc::clone(&controller);
            let value = short_input.value();
            spawn_local(async move {
                controller.validate_short(&value).await;
            });
        }
    })?;

    listen(&checkbox, "change", {
        let controller = Rc::clone(&controller);
        let checkbox = checkbox.clone();
        let short_input = short_input.clone();
        move || {
            let controller = Rc::clone(&controller);
            let enabled = checkbox.checked();
            let value = short_input.value();
            spawn_local(async move {
                controller.set_custom_slug_enabled(enabled, &value).await;
            });
        }
    })?;

    // The browser may restore field values on reload; validate what is there.
    let long_value = long_input.value();
    let short_value = short_input.value();
    spawn_local(async move {
        if !long_value.is_empty() {
            controller.validate_long(&long_value).await;
        }
        if controller.is_custom_slug_enabled() {
            controller.validate_short(&short_value).await;
        }
    });

    info!("Form bound to {origin}");
    Ok(())
}

fn listen(
    target: &HtmlInputElement,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), WebError> {
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(WebError::from_js)?;
    callback.forget();
    Ok(())
}
