use std::collections::HashMap;

use crate::eth::{EthChain, Provider};
use wallet_transport::client::RpcClient;

pub struct ChainFactory;

impl ChainFactory {
    pub fn eth_chain(url: &str, header: Option<HashMap<String, String>>) -> crate::Result<EthChain> {
        let client = RpcClient::new(url, header)?;
        Self::eth_chain_with_client(client)
    }

    /// For clients that need auth or a timeout.
    pub fn eth_chain_with_client(client: RpcClient) -> crate::Result<EthChain> {
        let provider = Provider::new(client)?;
        Ok(EthChain::new(provider))
    }
}
