use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    TransportError(#[from] wallet_transport::errors::TransportError),
    #[error("utils error {0}")]
    UtilsError(#[from] wallet_utils::error::Error),
    #[error("abi decode error {0}")]
    AbiDecode(String),
    #[error("account {0} could not be unlocked")]
    AccountLocked(String),
    #[error("no new block after block {start} within {waited_ms} ms")]
    BlockWaitTimeout { start: u64, waited_ms: u128 },
    #[error("receipt for {hash} not found within {waited_ms} ms")]
    ReceiptTimeout { hash: String, waited_ms: u128 },
    #[error("batch is empty")]
    EmptyBatch,
    #[error(
        "batch length mismatch destinations = {destinations} values = {values} datas = {datas}"
    )]
    BatchLengthMismatch {
        destinations: usize,
        values: usize,
        datas: usize,
    },
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::TransportError(e) => e.is_network_error(),
            Error::UtilsError(e) => e.is_network_error(),
            _ => false,
        }
    }
}
