pub mod receipt;
pub mod token;
pub mod wallet;
