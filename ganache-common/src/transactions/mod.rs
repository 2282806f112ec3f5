pub mod request;
pub mod result;

pub use request::TransactionRequest;
pub use result::{ApiErrorBody, TransactionResult};
