use alloy::primitives::U256;
use wallet_chain_interact::eth::{operations, EthChain};
use wallet_utils::unit;

use crate::{
    config::InteractorConfig,
    report::{BalanceDelta, ScenarioReport, TokenBalances, TokenDelta},
    InteractError,
};

/// Drives the deployed wallet and token contracts through a node that holds
/// the holders' keys.
pub struct PapyrusInteract {
    pub config: InteractorConfig,
    chain: EthChain,
}

impl PapyrusInteract {
    pub fn new(config: InteractorConfig) -> crate::Result<Self> {
        let chain = config.eth_chain()?;
        Ok(Self { config, chain })
    }

    pub fn chain(&self) -> &EthChain {
        &self.chain
    }

    fn wallet(&self) -> &str {
        &self.config.contracts.wallet
    }

    fn token(&self) -> &str {
        &self.config.contracts.token
    }

    pub async fn unlock_holders(&self) -> crate::Result<()> {
        for holder in &self.config.holders {
            let password = holder.resolve_password()?;
            self.chain
                .unlock_account(&holder.address, &password, holder.unlock_duration_secs)
                .await?;
            tracing::debug!("holder {} unlocked", holder.name);
        }
        Ok(())
    }

    pub async fn wait_for_next_block(&self) -> crate::Result<u64> {
        Ok(self.chain.wait_for_next_block().await?)
    }

    /// Sends `setTransferable(true)` from the coinbase unless transfers are
    /// already open. Returns whether anything was sent.
    pub async fn make_tokens_transferable(&self) -> crate::Result<bool> {
        if self.chain.transferable(self.token()).await? {
            tracing::info!("token {} already transferable", self.token());
            return Ok(false);
        }

        let coinbase = self.chain.coinbase().await?;
        let params = operations::SetTransferableOpt::new(&coinbase, self.token(), true)?;
        let hash = self.chain.send_transaction(params).await?;
        self.settle(&[hash]).await?;
        Ok(true)
    }

    pub async fn submit_transaction_to_wallet(
        &self,
        from: &str,
        to: &str,
        value: U256,
        data: &str,
    ) -> crate::Result<String> {
        let params = operations::SubmitTransactionOpt::new(from, self.wallet(), to, value, data)?;
        let hash = self.chain.send_transaction(params).await?;
        self.settle(std::slice::from_ref(&hash)).await?;
        Ok(hash)
    }

    pub async fn submit_transactions_to_wallet<S: AsRef<str>>(
        &self,
        from: &str,
        tos: &[S],
        values: &[U256],
        datas: &[S],
    ) -> crate::Result<String> {
        let params = operations::SubmitTransactionsOpt::new(from, self.wallet())?
            .with_calls(tos, values, datas)?;
        let hash = self.chain.send_transaction(params).await?;
        self.settle(std::slice::from_ref(&hash)).await?;
        Ok(hash)
    }

    /// Every confirmer sends its confirmation before a single block wait.
    pub async fn confirm_transaction_on_wallet(&self, id: u64) -> crate::Result<Vec<String>> {
        let mut hashes = Vec::new();
        for confirmer in self.config.confirmers()? {
            let params =
                operations::ConfirmTransactionOpt::new(&confirmer.address, self.wallet(), id)?;
            hashes.push(self.chain.send_transaction(params).await?);
        }
        self.settle(&hashes).await?;
        Ok(hashes)
    }

    pub async fn confirm_transactions_on_wallet(&self, ids: &[u64]) -> crate::Result<Vec<String>> {
        let mut hashes = Vec::new();
        for confirmer in self.config.confirmers()? {
            let params =
                operations::ConfirmTransactionsOpt::new(&confirmer.address, self.wallet(), ids)?;
            hashes.push(self.chain.send_transaction(params).await?);
        }
        self.settle(&hashes).await?;
        Ok(hashes)
    }

    pub async fn transaction_count(&self) -> crate::Result<u64> {
        let params = operations::TransactionCountOpt::new(self.wallet())?;
        let count = self.chain.eth_call::<_, U256>(params).await?;
        u64::try_from(count).map_err(|_| {
            InteractError::Chain(wallet_chain_interact::Error::Other(format!(
                "transaction count {count} exceeds u64"
            )))
        })
    }

    pub async fn token_balance(&self, owner: &str) -> crate::Result<U256> {
        Ok(self.chain.token_balance(self.token(), owner).await?)
    }

    pub async fn balance(&self, addr: &str) -> crate::Result<U256> {
        Ok(self.chain.balance(addr).await?)
    }

    async fn settle(&self, hashes: &[String]) -> crate::Result<()> {
        self.wait_for_next_block().await?;
        if self.config.mining.await_receipts {
            for hash in hashes {
                self.chain.wait_for_receipt(hash).await?;
            }
        }
        Ok(())
    }
}

// the scripted run
impl PapyrusInteract {
    pub async fn run_scenario(&self) -> crate::Result<ScenarioReport> {
        let scenario = &self.config.scenario;
        let mut report = ScenarioReport::default();

        self.unlock_holders().await?;
        report.made_transferable = self.make_tokens_transferable().await?;

        let amount = unit::convert_to_u256(&scenario.transfer_amount, scenario.token_decimals)?;
        let single_data = operations::token_transfer_data(
            self.config.holder_address(&scenario.single_recipient)?,
            amount,
        )?;
        let batch_datas = scenario
            .batch_recipients
            .iter()
            .map(|name| {
                let address = self.config.holder_address(name)?;
                Ok(operations::token_transfer_data(address, amount)?)
            })
            .collect::<crate::Result<Vec<String>>>()?;
        let submitter = self.config.submitter()?.address.clone();

        println!("Submitting single transaction to Papyrus Wallet:");
        let before = self.balance(&submitter).await?;
        let count = self.transaction_count().await?;
        self.submit_transaction_to_wallet(&submitter, self.token(), U256::ZERO, &single_data)
            .await?;
        let delta = BalanceDelta::new(&submitter, before, self.balance(&submitter).await?);
        println!("{delta}");
        report.single_tx_id = scenario.single_tx_id.unwrap_or(count);
        report.single_submit = Some(delta);

        println!("Submitting batched transaction to Papyrus Wallet:");
        let before = self.balance(&submitter).await?;
        let count = self.transaction_count().await?;
        let tos = vec![self.token().to_string(); batch_datas.len()];
        let values = vec![U256::ZERO; batch_datas.len()];
        self.submit_transactions_to_wallet(&submitter, &tos, &values, &batch_datas)
            .await?;
        let delta = BalanceDelta::new(&submitter, before, self.balance(&submitter).await?);
        println!("{delta}");
        report.batch_tx_ids = match &scenario.batch_tx_ids {
            Some(ids) => ids.clone(),
            None => (count..count + batch_datas.len() as u64).collect(),
        };
        report.batch_submit = Some(delta);

        println!("Confirming single transaction on Papyrus Wallet:");
        let before = self.recipient_balances().await?;
        self.confirm_transaction_on_wallet(report.single_tx_id).await?;
        report.single_confirm = self.print_token_deltas(&before).await?;

        println!("Confirming complex transaction on Papyrus Wallet:");
        let before = self.recipient_balances().await?;
        self.confirm_transactions_on_wallet(&report.batch_tx_ids).await?;
        report.batch_confirm = self.print_token_deltas(&before).await?;

        Ok(report)
    }

    /// Single recipient first, then batch recipients not already listed.
    async fn recipient_balances(&self) -> crate::Result<TokenBalances> {
        let scenario = &self.config.scenario;
        let mut names: Vec<&str> = vec![scenario.single_recipient.as_str()];
        for name in &scenario.batch_recipients {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }

        let mut balances = TokenBalances::default();
        for name in names {
            let address = self.config.holder_address(name)?;
            balances.push(name, address, self.token_balance(address).await?);
        }
        Ok(balances)
    }

    async fn print_token_deltas(&self, before: &TokenBalances) -> crate::Result<Vec<TokenDelta>> {
        let after = self.recipient_balances().await?;
        let deltas = before.deltas(&after);
        for delta in &deltas {
            println!("{delta}");
        }
        Ok(deltas)
    }
}
