use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A monetary value as the server reports it: a JSON number or a string.
///
/// The client never does arithmetic on these; it only displays them and
/// decides whether an optional value is worth showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(Number),
    Text(String),
}

impl Amount {
    /// Truthiness as a browser script would judge it: `0`, `NaN` and `""`
    /// count as absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            Amount::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(true),
            Amount::Text(s) => !s.is_empty(),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Amount::Number)
            .unwrap_or_else(|| Amount::Text(value.to_string()))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Number(Number::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Text(s) => f.write_str(s),
            Amount::Number(n) if n.is_f64() => match n.as_f64() {
                Some(v) => f.write_str(&js_number(v)),
                None => write!(f, "{}", n),
            },
            Amount::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Formats a float the way a browser's `Number#toString` does: plain
/// notation for 1e-6 <= |v| < 1e21, exponent notation with a signed
/// exponent outside that range, shortest round-trip digits either way.
fn js_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let sign = if v < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest digits, e.g. "1.23e-7"
    let scientific = format!("{:e}", v.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return format!("{}", v),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return format!("{}", v),
    };

    let k = digits.len() as i32;
    let n = exponent + 1;
    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { "-" } else { "+" };
        let lead = &digits[..1];
        let rest = &digits[1..];
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, (n - 1).abs())
        }
    };
    format!("{}{}", sign, body)
}
