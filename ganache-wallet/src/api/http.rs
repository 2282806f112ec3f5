use async_trait::async_trait;
use ganache_common::{ApiErrorBody, BalanceInfo, TransactionRequest, TransactionResult, WalletInfo};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{WalletApi, BALANCE_PATH, GENERATE_WALLET_PATH, SEND_TRANSACTION_PATH};
use crate::{config::UiConfig, errors::ClientError};

/// `WalletApi` over HTTP. On `wasm32` reqwest goes through `fetch`, so the
/// same code drives both the page and native callers.
///
/// No timeout is set; the transport default applies.
#[derive(Clone)]
pub struct HttpWalletApi {
    client: Client,
    base: String,
}

impl HttpWalletApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { client: Client::new(), base }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl WalletApi for HttpWalletApi {
    async fn generate_wallet(&self) -> Result<WalletInfo, ClientError> {
        let url = self.url(GENERATE_WALLET_PATH);
        debug!(%url, "requesting new wallet");
        let response = self.client.post(&url).send().await?;
        decode(response).await
    }

    async fn get_balance(&self, address: &str) -> Result<BalanceInfo, ClientError> {
        // address goes into the path untouched
        let url = self.url(&format!("{}{}", BALANCE_PATH, address));
        debug!(%url, "requesting balance");
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<TransactionResult, ClientError> {
        let url = self.url(SEND_TRANSACTION_PATH);
        debug!(%url, "submitting transaction");
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            return decode(response).await;
        }

        let body: ApiErrorBody = decode(response).await?;
        let message = body.message().unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        warn!(status = status.as_u16(), %message, "transaction rejected");
        Err(ClientError::Rejected { status: status.as_u16(), message })
    }
}

/// Status is not looked at here; a body of the wrong shape is the error.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
