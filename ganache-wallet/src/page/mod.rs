pub mod dom;
pub mod memory;

pub use dom::DomPage;
pub use memory::MemoryPage;

use crate::errors::ClientError;

/// The document the actions work against.
pub trait Page {
    /// Current value of the form field with this id.
    fn input_value(&self, id: &str) -> Result<String, ClientError>;

    /// Replaces the content of the region with this id.
    fn set_html(&self, id: &str, html: &str) -> Result<(), ClientError>;

    /// Blocking user notification.
    fn alert(&self, message: &str);
}
