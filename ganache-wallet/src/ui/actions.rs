use ganache_common::TransactionRequest;
use tracing::{error, info, warn};

use super::{input::parse_float, render};
use crate::{api::WalletApi, config::ElementIds, errors::ClientError, page::Page};

/// The three button actions of the wallet page.
///
/// Holds no state between invocations. Calls may overlap; whichever
/// response resolves last owns the region it writes.
pub struct WalletUi<A, P> {
    api: A,
    page: P,
    ids: ElementIds,
}

impl<A: WalletApi, P: Page> WalletUi<A, P> {
    pub fn new(api: A, page: P, ids: ElementIds) -> Self {
        Self { api, page, ids }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Failures are alerted; nothing is rendered unless the wallet arrived.
    pub async fn generate_wallet(&self) {
        if let Err(e) = self.try_generate_wallet().await {
            warn!(error = %e, "wallet generation failed");
            self.page.alert(&format!("Error generating wallet: {}", e));
        }
    }

    async fn try_generate_wallet(&self) -> Result<(), ClientError> {
        let wallet = self.api.generate_wallet().await?;
        self.page.set_html(&self.ids.wallet_result, &render::wallet(&wallet))?;
        info!(address = %wallet.address, "✅ wallet generated");
        Ok(())
    }

    /// An empty address field stops here without a request.
    pub async fn get_balance(&self) {
        let address = match self.page.input_value(&self.ids.address) {
            Ok(address) => address,
            Err(e) => {
                self.page.alert(&format!("Error fetching balance: {}", e));
                return;
            }
        };
        if address.is_empty() {
            self.page.alert("Please enter an address");
            return;
        }

        if let Err(e) = self.try_get_balance(&address).await {
            warn!(%address, error = %e, "balance lookup failed");
            self.page.alert(&format!("Error fetching balance: {}", e));
        }
    }

    async fn try_get_balance(&self, address: &str) -> Result<(), ClientError> {
        let balance = self.api.get_balance(address).await?;
        self.page.set_html(&self.ids.balance_result, &render::balance(&balance))?;
        Ok(())
    }

    /// Unlike the other two actions, failures are rendered inline in the
    /// transaction region instead of alerted.
    pub async fn send_transaction(&self) {
        let outcome = match self.read_transaction() {
            Ok(request) => {
                info!(?request, "Transaction Data");
                self.api
                    .send_transaction(&request)
                    .await
                    .map(|result| render::transaction_success(&result.transaction_hash))
            }
            Err(e) => Err(e),
        };

        let html = match outcome {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, "transaction failed");
                render::transaction_error(&e.to_string())
            }
        };

        if let Err(e) = self.page.set_html(&self.ids.transaction_result, &html) {
            error!(error = %e, "could not render transaction result");
        }
    }

    fn read_transaction(&self) -> Result<TransactionRequest, ClientError> {
        Ok(TransactionRequest::new(
            self.page.input_value(&self.ids.sender)?,
            self.page.input_value(&self.ids.receiver)?,
            self.page.input_value(&self.ids.private_key)?,
            parse_float(&self.page.input_value(&self.ids.amount)?),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use async_trait::async_trait;
    use ganache_common::{Amount, BalanceInfo, TransactionResult, WalletInfo};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockApi {
        wallet: Option<WalletInfo>,
        balance: Option<BalanceInfo>,
        transaction: Option<Result<TransactionResult, String>>,
        balance_calls: RefCell<Vec<String>>,
        sent: RefCell<Vec<TransactionRequest>>,
    }

    #[async_trait(?Send)]
    impl WalletApi for MockApi {
        async fn generate_wallet(&self) -> Result<WalletInfo, ClientError> {
            self.wallet.clone().ok_or_else(|| ClientError::Transport("connection refused".into()))
        }

        async fn get_balance(&self, address: &str) -> Result<BalanceInfo, ClientError> {
            self.balance_calls.borrow_mut().push(address.to_string());
            self.balance.clone().ok_or_else(|| ClientError::Decode("missing field `eth_balance`".into()))
        }

        async fn send_transaction(&self, request: &TransactionRequest) -> Result<TransactionResult, ClientError> {
            self.sent.borrow_mut().push(request.clone());
            match self.transaction.clone() {
                Some(Ok(result)) => Ok(result),
                Some(Err(message)) => Err(ClientError::Rejected { status: 400, message }),
                None => Err(ClientError::Transport("connection refused".into())),
            }
        }
    }

    fn ui(api: MockApi) -> WalletUi<MockApi, MemoryPage> {
        let ids = ElementIds::default();
        WalletUi::new(api, MemoryPage::with_elements(&ids), ids)
    }

    fn usd_balance(eth: f64, usd: u64) -> BalanceInfo {
        BalanceInfo { eth_balance: Amount::from(eth), balance: Some(Amount::from(usd)), address: None }
    }

    #[tokio::test]
    async fn test_generate_wallet_renders_address_and_masked_key() {
        let ui = ui(MockApi {
            wallet: Some(WalletInfo { address: "0xABC".into(), private_key: "pk1".into() }),
            ..Default::default()
        });

        ui.generate_wallet().await;

        let html = ui.page().html("wallet-result").unwrap();
        assert!(html.contains("0xABC"));
        assert!(html.contains(r#"type="password" value="pk1""#));
        assert!(ui.page().alerts().is_empty());
    }

    #[tokio::test]
    async fn test_generate_wallet_failure_alerts_without_rendering() {
        let ui = ui(MockApi::default());

        ui.generate_wallet().await;

        assert_eq!(ui.page().html("wallet-result").unwrap(), "");
        assert_eq!(ui.page().alerts(), vec!["Error generating wallet: Network error: connection refused"]);
    }

    #[tokio::test]
    async fn test_get_balance_renders_usd_value() {
        let ui = ui(MockApi { balance: Some(usd_balance(1.5, 300)), ..Default::default() });
        ui.page().set_field("address", "0x1");

        ui.get_balance().await;

        let html = ui.page().html("balance-result").unwrap();
        assert!(html.contains("1.5"));
        assert!(html.contains("$300"));
        assert_eq!(*ui.api().balance_calls.borrow(), vec!["0x1".to_string()]);
    }

    #[tokio::test]
    async fn test_get_balance_hides_zero_usd_value() {
        let ui = ui(MockApi { balance: Some(usd_balance(1.5, 0)), ..Default::default() });
        ui.page().set_field("address", "0x1");

        ui.get_balance().await;

        let html = ui.page().html("balance-result").unwrap();
        assert!(html.contains("1.5"));
        assert!(!html.contains("USD Value"));
    }

    #[tokio::test]
    async fn test_get_balance_empty_address_skips_request() {
        let ui = ui(MockApi { balance: Some(usd_balance(1.5, 300)), ..Default::default() });

        ui.get_balance().await;

        assert_eq!(ui.page().alerts(), vec!["Please enter an address"]);
        assert!(ui.api().balance_calls.borrow().is_empty());
        assert_eq!(ui.page().html("balance-result").unwrap(), "");
    }

    #[tokio::test]
    async fn test_get_balance_failure_alerts() {
        let ui = ui(MockApi::default());
        ui.page().set_field("address", "0x1");

        ui.get_balance().await;

        let alerts = ui.page().alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].starts_with("Error fetching balance: Invalid response:"));
    }

    #[tokio::test]
    async fn test_get_balance_is_repeatable() {
        let ui = ui(MockApi { balance: Some(usd_balance(1.5, 300)), ..Default::default() });
        ui.page().set_field("address", "0x1");

        ui.get_balance().await;
        let first = ui.page().html("balance-result").unwrap();
        ui.get_balance().await;
        let second = ui.page().html("balance-result").unwrap();

        assert_eq!(first, second);
        assert_eq!(ui.api().balance_calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_send_transaction_success_banner() {
        let ui = ui(MockApi {
            transaction: Some(Ok(TransactionResult { transaction_hash: "0xHASH".into(), status: None })),
            ..Default::default()
        });
        ui.page().set_field("sender", "0xS");
        ui.page().set_field("receiver", "0xR");
        ui.page().set_field("privateKey", "pk");
        ui.page().set_field("amount", "0.5");

        ui.send_transaction().await;

        let html = ui.page().html("transaction-result").unwrap();
        assert!(html.contains("alert-success"));
        assert!(html.contains("0xHASH"));

        let sent = ui.api().sent.borrow();
        assert_eq!(sent[0].sender, "0xS");
        assert_eq!(sent[0].receiver, "0xR");
        assert_eq!(sent[0].private_key, "pk");
        assert_eq!(sent[0].amount, 0.5);
    }

    #[tokio::test]
    async fn test_send_transaction_rejection_renders_inline() {
        let ui = ui(MockApi { transaction: Some(Err("insufficient funds".into())), ..Default::default() });
        ui.page().set_field("amount", "1");

        ui.send_transaction().await;

        let html = ui.page().html("transaction-result").unwrap();
        assert!(html.contains("alert-danger"));
        assert!(html.contains("insufficient funds"));
        assert!(ui.page().alerts().is_empty());
    }

    #[tokio::test]
    async fn test_send_transaction_forwards_unparsable_amount() {
        let ui = ui(MockApi {
            transaction: Some(Ok(TransactionResult { transaction_hash: "0x1".into(), status: None })),
            ..Default::default()
        });
        ui.page().set_field("amount", "lots");

        ui.send_transaction().await;

        assert!(ui.api().sent.borrow()[0].amount.is_nan());
    }

    #[tokio::test]
    async fn test_send_transaction_missing_field_renders_error() {
        let ids = ElementIds::default();
        let page = MemoryPage::new();
        page.add_region(&ids.transaction_result);
        let ui = WalletUi::new(MockApi::default(), page, ids);

        ui.send_transaction().await;

        let html = ui.page().html("transaction-result").unwrap();
        assert!(html.contains("Error: Page error: element #sender not found"));
        assert!(ui.api().sent.borrow().is_empty());
    }
}
