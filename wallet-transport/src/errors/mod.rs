use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("node response  {0}")]
    NodeResponseError(String),
    #[error("rpc error code = {code} message = {message}")]
    RpcError { code: i64, message: String },
    #[error("query result empty")]
    EmptyResult,
    #[error("Utils error: {0}")]
    Utils(#[from] wallet_utils::error::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }
}
