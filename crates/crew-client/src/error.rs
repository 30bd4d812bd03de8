use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not authorized: the target's token was rejected")]
    Unauthorized,

    #[error("forbidden: not allowed to configure team '{team}'")]
    Forbidden { team: String },

    #[error("unexpected response: HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to decode team response: {0}")]
    Decode(#[from] serde_json::Error),
}
