//! HTML fragments written into the result regions. Markup and wording follow
//! the Bootstrap page the client is embedded in.

use ganache_common::{BalanceInfo, WalletInfo};

pub fn wallet(wallet: &WalletInfo) -> String {
    format!(
        concat!(
            "<p>Address: <strong>{}</strong></p>\n",
            "<p>Private Key: <input type=\"password\" value=\"{}\" class=\"form-control\" readonly></p>\n",
            "<div class=\"alert alert-warning mt-2\">\u{26a0}\u{fe0f} Save this private key securely!</div>\n",
        ),
        escape(&wallet.address),
        escape(&wallet.private_key),
    )
}

/// The USD line only appears for a truthy `balance`, so a zero USD value is
/// not shown.
pub fn balance(info: &BalanceInfo) -> String {
    let mut html = format!("<p>ETH Balance: <strong>{}</strong></p>\n", escape(&info.eth_balance.to_string()));
    if let Some(usd) = info.usd_value() {
        html.push_str(&format!("<p>USD Value: ${}</p>\n", escape(&usd.to_string())));
    }
    html
}

pub fn transaction_success(transaction_hash: &str) -> String {
    format!(
        "<div class=\"alert alert-success\">Transaction successful! Hash: {}</div>\n",
        escape(transaction_hash)
    )
}

pub fn transaction_error(message: &str) -> String {
    format!("<div class=\"alert alert-danger\">Error: {}</div>\n", escape(message))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
