use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Freshly generated account as returned by `/api/generate-wallet/`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub private_key: String,
}

impl std::fmt::Debug for WalletInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletInfo")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Body of `/api/balance/{address}`.
///
/// `balance` is the optional USD value; a `null` counts as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceInfo {
    pub eth_balance: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl BalanceInfo {
    /// USD value worth displaying, if any.
    pub fn usd_value(&self) -> Option<&Amount> {
        self.balance.as_ref().filter(|b| b.is_truthy())
    }
}
