use super::protocol::receipt::ReceiptStatus;
use alloy::{primitives::U256, rpc::types::TransactionRequest};
use serde_json::json;
use wallet_transport::{client::RpcClient, types::JsonRpcParams};
use wallet_utils::unit;

pub struct Provider {
    client: RpcClient,
}

impl Provider {
    pub fn new(rpc_client: RpcClient) -> crate::Result<Self> {
        Ok(Self { client: rpc_client })
    }

    pub async fn balance(&self, addr: &str) -> crate::Result<U256> {
        let params = JsonRpcParams::default()
            .method("eth_getBalance")
            .params(vec![addr, "latest"]);

        let r = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;
        Ok(unit::u256_from_str(&r)?)
    }

    pub async fn block_number(&self) -> crate::Result<u64> {
        let c: Vec<String> = Vec::new();
        let params = JsonRpcParams::default()
            .method("eth_blockNumber")
            .params(c);

        let r = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;
        Ok(unit::parse_quantity_u64(&r)?)
    }

    pub async fn coinbase(&self) -> crate::Result<String> {
        let c: Vec<String> = Vec::new();
        let params = JsonRpcParams::default().method("eth_coinbase").params(c);

        let r = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;
        Ok(r)
    }

    /// `personal_unlockAccount`; a `None` duration leaves the node default.
    pub async fn unlock_account(
        &self,
        addr: &str,
        password: &str,
        duration_secs: Option<u64>,
    ) -> crate::Result<bool> {
        let params = JsonRpcParams::default()
            .method("personal_unlockAccount")
            .params(vec![json!(addr), json!(password), json!(duration_secs)]);

        let r = self
            .client
            .set_sensitive_params(params)
            .send_json_rpc::<bool>()
            .await?;
        Ok(r)
    }

    /// `eth_sendTransaction`: the node signs with the (unlocked) `from` account.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> crate::Result<String> {
        let params = JsonRpcParams::default()
            .method("eth_sendTransaction")
            .params(vec![json!(tx)]);

        let r = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;
        Ok(r)
    }

    pub async fn eth_call(&self, tx: TransactionRequest) -> crate::Result<String> {
        let params = JsonRpcParams::default()
            .method("eth_call")
            .params(vec![json!(tx), json!("latest")]);

        let r = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;

        Ok(r)
    }

    /// `None` while the transaction is still pending.
    pub async fn transaction_receipt(&self, hash: &str) -> crate::Result<Option<ReceiptStatus>> {
        let params = JsonRpcParams::default()
            .method("eth_getTransactionReceipt")
            .params(vec![hash]);

        let rs = self
            .client
            .set_params(params)
            .send_json_rpc_opt::<ReceiptStatus>()
            .await?;
        Ok(rs)
    }
}
