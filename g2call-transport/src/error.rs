//! Transport errors

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request timed out")]
    Timeout,

    #[error("HTTP client construction failed: {0}")]
    Client(reqwest::Error),

    #[error("Request failed: {0}")]
    Request(reqwest::Error),
}
