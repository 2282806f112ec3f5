use thiserror::Error;

/// Everything that can end a single UI action.
///
/// The `Display` text is shown to the user as is, in an alert or in the
/// transaction banner.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, refused connection,
    /// CORS, aborted fetch).
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The server answered with a non-success status and an error payload.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A page element was missing or of the wrong kind.
    #[error("Page error: {0}")]
    Page(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
