mod rpc_client;
pub use rpc_client::*;
