mod chain;
pub use chain::*;
pub mod operations;
mod params;
pub use params::*;
pub mod protocol;
mod provider;
pub use provider::*;
