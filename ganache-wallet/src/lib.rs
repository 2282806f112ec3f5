pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod page;
pub mod ui;
pub mod wasm;

pub use api::{HttpWalletApi, WalletApi};
pub use config::{ElementIds, UiConfig};
pub use errors::ClientError;
pub use page::{MemoryPage, Page};
pub use ui::WalletUi;
