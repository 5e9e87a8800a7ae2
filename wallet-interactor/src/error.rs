use thiserror::Error;

#[derive(Error, Debug)]
pub enum InteractError {
    #[error("chain error: {0}")]
    Chain(#[from] wallet_chain_interact::Error),
    #[error("utils error: {0}")]
    Utils(#[from] wallet_utils::Error),
    #[error("transport error: {0}")]
    Transport(#[from] wallet_transport::TransportError),
    #[error("config error: {0}")]
    Config(String),
    #[error("unknown holder `{0}`")]
    UnknownHolder(String),
    #[error("no password for holder `{0}`")]
    MissingPassword(String),
}

impl InteractError {
    pub fn is_network_error(&self) -> bool {
        match self {
            InteractError::Chain(e) => e.is_network_error(),
            InteractError::Utils(e) => e.is_network_error(),
            InteractError::Transport(e) => e.is_network_error(),
            _ => false,
        }
    }
}
