pub mod eth;
pub mod factory;
mod errors;
pub use errors::*;
pub mod types;

pub type Result<T> = std::result::Result<T, Error>;
