pub mod amount;
pub mod transactions;
pub mod wallet;

pub use amount::Amount;
pub use transactions::{ApiErrorBody, TransactionRequest, TransactionResult};
pub use wallet::{BalanceInfo, WalletInfo};
