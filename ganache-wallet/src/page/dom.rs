use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

use super::Page;
use crate::errors::ClientError;

/// `Page` backed by the live browser document.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or_else(|| ClientError::Page("no global window".to_string()))?;
        let document = window.document().ok_or_else(|| ClientError::Page("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn element(&self, id: &str) -> Result<Element, ClientError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ClientError::Page(format!("element #{} not found", id)))
    }
}

impl Page for DomPage {
    fn input_value(&self, id: &str) -> Result<String, ClientError> {
        let input = self
            .element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ClientError::Page(format!("element #{} is not an input", id)))?;
        Ok(input.value())
    }

    fn set_html(&self, id: &str, html: &str) -> Result<(), ClientError> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            tracing::warn!(%message, "alert could not be shown");
        }
    }
}
