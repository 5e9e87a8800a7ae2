pub mod client;
pub mod errors;
pub mod request_builder;
pub mod types;

pub use errors::TransportError;
