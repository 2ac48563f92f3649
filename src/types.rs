use thiserror::Error;

/// Errors raised while talking to the Screenly API or preparing a QA run.
#[derive(Debug, Error)]
pub enum QaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{path} returned {status}: {body}")]
    Api {
        path: String,
        status: u16,
        body: String,
    },

    #[error("SCREENLY_API_TOKEN is not set")]
    MissingApiToken,

    #[error("no playable assets found in the account")]
    NoAssets,
}

impl QaError {
    pub fn api(path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            path: path.into(),
            status,
            body: body.into(),
        }
    }
}
