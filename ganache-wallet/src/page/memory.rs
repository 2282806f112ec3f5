use std::{cell::RefCell, collections::HashMap};

use super::Page;
use crate::errors::ClientError;

/// In-memory `Page` for headless hosts and tests.
///
/// Fields and regions must be declared before use, mirroring elements that
/// exist in the markup.
#[derive(Default)]
pub struct MemoryPage {
    fields: RefCell<HashMap<String, String>>,
    regions: RefCell<HashMap<String, String>>,
    alerts: RefCell<Vec<String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with every element of the default layout present and empty.
    pub fn with_elements(ids: &crate::config::ElementIds) -> Self {
        let page = Self::new();
        for field in [&ids.address, &ids.sender, &ids.receiver, &ids.private_key, &ids.amount] {
            page.set_field(field, "");
        }
        for region in [&ids.wallet_result, &ids.balance_result, &ids.transaction_result] {
            page.regions.borrow_mut().insert(region.clone(), String::new());
        }
        page
    }

    pub fn set_field(&self, id: &str, value: &str) {
        self.fields.borrow_mut().insert(id.to_string(), value.to_string());
    }

    pub fn add_region(&self, id: &str) {
        self.regions.borrow_mut().entry(id.to_string()).or_default();
    }

    pub fn html(&self, id: &str) -> Option<String> {
        self.regions.borrow().get(id).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Page for MemoryPage {
    fn input_value(&self, id: &str) -> Result<String, ClientError> {
        self.fields
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::Page(format!("element #{} not found", id)))
    }

    fn set_html(&self, id: &str, html: &str) -> Result<(), ClientError> {
        match self.regions.borrow_mut().get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                Ok(())
            }
            None => Err(ClientError::Page(format!("element #{} not found", id))),
        }
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
