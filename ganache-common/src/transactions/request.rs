use std::fmt;

use serde::{Deserialize, Serialize};

/// Transfer submitted to `/api/send-transaction/`.
///
/// Nothing here is validated. `amount` may be NaN when the form held no
/// number; serde_json writes non-finite floats as `null`, which is also
/// what the browser's `JSON.stringify` sends.
#[derive(Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub sender: String,
    pub receiver: String,
    pub private_key: String,
    #[serde(deserialize_with = "nullable_amount")]
    pub amount: f64,
}

impl TransactionRequest {
    pub fn new(sender: String, receiver: String, private_key: String, amount: f64) -> Self {
        Self { sender, receiver, private_key, amount }
    }
}

fn nullable_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl fmt::Debug for TransactionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionRequest")
            .field("sender", &self.sender)
            .field("receiver", &self.receiver)
            .field("private_key", &"<redacted>")
            .field("amount", &self.amount)
            .finish()
    }
}
