use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}
