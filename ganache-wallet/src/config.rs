use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::errors::ClientError;

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_API_BASE: &str = "http://127.0.0.1:8000";

/// Ids of the page elements the actions read from and write into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub wallet_result: String,
    pub address: String,
    pub balance_result: String,
    pub sender: String,
    pub receiver: String,
    pub private_key: String,
    pub amount: String,
    pub transaction_result: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            wallet_result: "wallet-result".to_string(),
            address: "address".to_string(),
            balance_result: "balance-result".to_string(),
            sender: "sender".to_string(),
            receiver: "receiver".to_string(),
            private_key: "privateKey".to_string(),
            amount: "amount".to_string(),
            transaction_result: "transaction-result".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Server origin the `/api/...` paths are appended to.
    pub api_base: String,
    pub log_level: String,
    pub elements: ElementIds,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            log_level: "info".to_string(),
            elements: ElementIds::default(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    NATIVE_API_BASE.to_string()
}

impl UiConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into(), ..Self::default() }
    }

    pub fn level(&self) -> Result<Level, ClientError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ClientError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        // `location.origin` of a page opened from file:// is the string "null"
        if self.api_base.is_empty() || self.api_base == "null" {
            return Err(ClientError::Config(
                "page has no http origin; serve it over HTTP or pass api_base to configure()".to_string(),
            ));
        }
        reqwest::Url::parse(&self.api_base)
            .map_err(|e| ClientError::Config(format!("invalid api_base '{}': {}", self.api_base, e)))?;
        self.level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_host_page() {
        let config = UiConfig::default();
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.elements.private_key, "privateKey");
        assert_eq!(config.elements.transaction_result, "transaction-result");
        assert_eq!(config.level().unwrap(), Level::INFO);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: UiConfig = serde_json::from_str(
            r#"{"api_base": "http://localhost:9000", "elements": {"address": "addr"}}"#,
        ).unwrap();
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.elements.address, "addr");
        assert_eq!(config.elements.balance_result, "balance-result");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = UiConfig::with_api_base("not a url");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));

        let config = UiConfig { log_level: "loud".into(), ..UiConfig::default() };
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_explains_opaque_origin() {
        for base in ["null", ""] {
            let err = UiConfig::with_api_base(base).validate().unwrap_err();
            assert!(err.to_string().contains("serve it over HTTP"), "got {}", err);
        }
    }
}
