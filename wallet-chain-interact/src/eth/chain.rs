use super::operations::{TokenBalanceOpt, TransferableOpt};
use super::protocol::receipt::ReceiptStatus;
use super::provider::Provider;
use super::PollSetting;
use alloy::primitives::U256;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::{SolType, SolValue};
use std::time::Duration;
use tokio::time::{sleep, Instant};

pub struct EthChain {
    pub provider: Provider,
    poll: PollSetting,
}

impl EthChain {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            poll: PollSetting::default(),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll.interval = interval;
        self
    }

    pub fn with_block_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.poll.timeout = timeout;
        self
    }
}

impl EthChain {
    pub async fn balance(&self, addr: &str) -> crate::Result<U256> {
        self.provider.balance(addr).await
    }

    pub async fn token_balance(&self, token: &str, owner: &str) -> crate::Result<U256> {
        let params = TokenBalanceOpt::new(token, owner)?;
        self.eth_call::<_, U256>(params).await
    }

    pub async fn transferable(&self, token: &str) -> crate::Result<bool> {
        let params = TransferableOpt::new(token)?;
        self.eth_call::<_, bool>(params).await
    }

    pub async fn block_num(&self) -> crate::Result<u64> {
        self.provider.block_number().await
    }

    pub async fn coinbase(&self) -> crate::Result<String> {
        self.provider.coinbase().await
    }

    pub async fn unlock_account(
        &self,
        addr: &str,
        password: &str,
        duration_secs: Option<u64>,
    ) -> crate::Result<()> {
        if !self
            .provider
            .unlock_account(addr, password, duration_secs)
            .await?
        {
            return Err(crate::Error::AccountLocked(addr.to_string()));
        }
        tracing::info!("unlocked account {addr}");
        Ok(())
    }
}

// about block polling
impl EthChain {
    /// Re-reads the block height until it moves past the height seen on entry.
    pub async fn wait_for_next_block(&self) -> crate::Result<u64> {
        let start = self.block_num().await?;
        let started_at = Instant::now();
        tracing::debug!("waiting for a block after {start}");

        loop {
            sleep(self.poll.interval).await;

            let current = self.block_num().await?;
            if current != start {
                tracing::info!("block {current} mined (was {start})");
                return Ok(current);
            }

            let waited = started_at.elapsed();
            if self.poll.expired(waited) {
                return Err(crate::Error::BlockWaitTimeout {
                    start,
                    waited_ms: waited.as_millis(),
                });
            }
        }
    }

    pub async fn wait_for_receipt(&self, hash: &str) -> crate::Result<ReceiptStatus> {
        let started_at = Instant::now();

        loop {
            if let Some(receipt) = self.provider.transaction_receipt(hash).await? {
                match receipt.succeeded() {
                    Some(false) => tracing::warn!("transaction {hash} reverted"),
                    _ => tracing::info!(
                        "transaction {hash} mined in block {:?}",
                        receipt.block_number
                    ),
                }
                return Ok(receipt);
            }

            let waited = started_at.elapsed();
            if self.poll.expired(waited) {
                return Err(crate::Error::ReceiptTimeout {
                    hash: hash.to_string(),
                    waited_ms: waited.as_millis(),
                });
            }
            sleep(self.poll.interval).await;
        }
    }
}

// about send transaction
impl EthChain {
    pub async fn eth_call<T, R>(&self, params: T) -> crate::Result<R>
    where
        T: crate::types::Transaction<TransactionRequest>,
        R: SolValue + std::convert::From<<<R as SolValue>::SolType as SolType>::RustType>,
    {
        let params = params.build_transaction()?;
        let res = self.provider.eth_call(params).await?;

        let bytes = wallet_utils::hex_func::hex_decode(&res)?;

        let result = R::abi_decode(&bytes, true)
            .map_err(|e| crate::Error::AbiDecode(format!("{e} value = {res}")))?;

        Ok(result)
    }

    /// Submits through `eth_sendTransaction`; the sender must be unlocked on the node.
    pub async fn send_transaction<T>(&self, params: T) -> crate::Result<String>
    where
        T: crate::types::Transaction<TransactionRequest>,
    {
        let params = params.build_transaction()?;
        let from = params.from;

        let hash = self.provider.send_transaction(params).await?;
        tracing::info!("sent transaction {hash} from {from:?}");
        Ok(hash)
    }
}
