use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] vodloop_api::ApiError),

    #[error("Initialization failed: {0}")]
    Initialization(String),
}
