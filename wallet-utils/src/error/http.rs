#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Invalid header {0}")]
    InvalidHeader(String),
    #[error("request error {0}")]
    ReqError(#[from] reqwest::Error),
}
