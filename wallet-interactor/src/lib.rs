pub mod config;
pub mod error;
pub mod interact;
pub mod report;

pub use config::InteractorConfig;
pub use error::InteractError;
pub use interact::PapyrusInteract;

pub type Result<T> = std::result::Result<T, InteractError>;
