use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no token provided")]
    MissingToken,
    #[error("HTTP error {code}")]
    Status { code: u16 },
    #[error("Failed: {0}")]
    Download(String),
    #[error("{0}")]
    ProfileError(String),
    #[error("profile not found")]
    ProfileNotFound,
    #[error("profile record is missing `{0}`")]
    MissingField(&'static str),
    #[error("contact was not saved")]
    NotSaved,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}
