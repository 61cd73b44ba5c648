//! [`FormView`] over the page's DOM elements.

use crate::error::WebError;
use crate::markup::{DISPLAY_PROPERTY, URL_PREFIX_ID, presentation};

use form_core::FormView;

use common::ErrorLocation;
use models::{Field, Validity};

use std::panic::Location;

use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

struct FieldElements {
    input: HtmlInputElement,
    message: HtmlElement,
}

pub(crate) struct DomFormView {
    prefix: HtmlElement,
    long: FieldElements,
    short: FieldElements,
}

#[track_caller]
pub(crate) fn lookup<T: JsCast>(document: &Document, id: &'static str) -> Result<T, WebError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| WebError::MissingElement {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
}

impl DomFormView {
    pub(crate) fn locate(document: &Document) -> Result<Self, WebError> {
        let field = |field: Field| -> Result<FieldElements, WebError> {
            Ok(FieldElements {
                input: lookup(document, field.input_id())?,
                message: lookup(document, field.message_id())?,
            })
        };

        Ok(Self {
            prefix: lookup(document, URL_PREFIX_ID)?,
            long: field(Field::Long)?,
            short: field(Field::Short)?,
        })
    }

    fn elements(&self, field: Field) -> &FieldElements {
        match field {
            Field::Long => &self.long,
            Field::Short => &self.short,
        }
    }

    pub(crate) fn input(&self, field: Field) -> &HtmlInputElement {
        &self.elements(field).input
    }

    fn apply(&self, field: Field, validity: Validity, text: Option<&str>) {
        let look = presentation(validity);
        let elements = self.elements(field);

        let classes = elements.input.class_list();
        for class in look.remove_classes {
            report(field, classes.remove_1(class));
        }
        if let Some(class) = look.add_class {
            report(field, classes.add_1(class));
        }

        if let Some(text) = text {
            elements.message.set_text_content(Some(text));
        }
        report(
            field,
            elements
                .message
                .style()
                .set_property(DISPLAY_PROPERTY, look.message_display),
        );
    }
}

fn report(field: Field, result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn!("Failed to update {field} display: {e:?}");
    }
}

impl FormView for DomFormView {
    fn set_prefix(&self, prefix: &str) {
        self.prefix.set_text_content(Some(prefix));
    }

    fn set_valid(&self, field: Field) {
        self.apply(field, Validity::Valid, None);
    }

    fn set_invalid(&self, field: Field, message: &str) {
        self.apply(field, Validity::Invalid, Some(message));
    }

    fn clear(&self, field: Field) {
        self.apply(field, Validity::Unset, None);
    }

    fn set_enabled(&self, field: Field, enabled: bool) {
        self.input(field).set_disabled(!enabled);
    }
}
