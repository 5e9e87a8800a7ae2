pub mod http;
pub mod parse;
pub mod serde;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde error: {0}")]
    Serde(#[from] serde::SerdeError),
    #[error("Parse error: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("Http error: {0}")]
    Http(#[from] http::HttpError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}
