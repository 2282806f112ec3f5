pub mod http;

use async_trait::async_trait;
use ganache_common::{BalanceInfo, TransactionRequest, TransactionResult, WalletInfo};

use crate::errors::ClientError;

pub use http::HttpWalletApi;

pub const GENERATE_WALLET_PATH: &str = "/api/generate-wallet/";
pub const BALANCE_PATH: &str = "/api/balance/";
pub const SEND_TRANSACTION_PATH: &str = "/api/send-transaction/";

/// The wallet server as seen from the page.
///
/// Futures are not `Send`: in the browser everything runs on the single
/// event loop thread.
#[async_trait(?Send)]
pub trait WalletApi {
    async fn generate_wallet(&self) -> Result<WalletInfo, ClientError>;

    async fn get_balance(&self, address: &str) -> Result<BalanceInfo, ClientError>;

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<TransactionResult, ClientError>;
}
