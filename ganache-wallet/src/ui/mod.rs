pub mod actions;
pub mod input;
pub mod render;

pub use actions::WalletUi;
