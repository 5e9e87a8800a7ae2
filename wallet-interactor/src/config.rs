use serde::Deserialize;
use std::{collections::HashMap, path::Path, time::Duration};
use wallet_chain_interact::{eth::EthChain, factory::ChainFactory};
use wallet_transport::client::{BaseAuth, RpcClient};

use crate::InteractError;

pub const CONFIG_FILE: &str = "config.toml";

/// Interactor configuration, read from a TOML file.
#[derive(Debug, Deserialize, Clone)]
pub struct InteractorConfig {
    pub node: NodeConfig,
    #[serde(default)]
    pub mining: MiningConfig,
    pub contracts: ContractsConfig,
    pub holders: Vec<HolderConfig>,
    pub scenario: ScenarioConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NodeConfig {
    pub rpc_url: String,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl NodeConfig {
    pub fn rpc_client(&self) -> crate::Result<RpcClient> {
        let base_auth = self
            .username
            .as_deref()
            .map(|name| BaseAuth::new(name, self.password.as_deref()));
        let timeout = self.request_timeout_secs.map(Duration::from_secs);

        Ok(RpcClient::build(
            &self.rpc_url,
            self.headers.clone(),
            base_auth,
            timeout,
        )?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MiningConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub block_timeout_secs: Option<u64>,
    #[serde(default)]
    pub await_receipts: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            block_timeout_secs: None,
            await_receipts: false,
        }
    }
}

impl MiningConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn block_timeout(&self) -> Option<Duration> {
        self.block_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContractsConfig {
    pub wallet: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HolderConfig {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_env: Option<String>,
    #[serde(default)]
    pub unlock_duration_secs: Option<u64>,
}

impl HolderConfig {
    /// Inline password first, then the named environment variable.
    pub fn resolve_password(&self) -> crate::Result<String> {
        if let Some(password) = &self.password {
            return Ok(password.clone());
        }
        self.password_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .ok_or_else(|| InteractError::MissingPassword(self.name.clone()))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub submitter: String,
    pub confirmers: Vec<String>,
    #[serde(default = "default_transfer_amount")]
    pub transfer_amount: String,
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u8,
    pub single_recipient: String,
    pub batch_recipients: Vec<String>,
    #[serde(default)]
    pub single_tx_id: Option<u64>,
    #[serde(default)]
    pub batch_tx_ids: Option<Vec<u64>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_transfer_amount() -> String {
    "1".to_string()
}

fn default_token_decimals() -> u8 {
    18
}

fn default_log_level() -> String {
    wallet_utils::log::DEFAULT_LOG_LEVEL.to_string()
}

impl InteractorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            InteractError::Config(format!("read {} failed: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: InteractorConfig = wallet_utils::serde_func::toml_from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn eth_chain(&self) -> crate::Result<EthChain> {
        let client = self.node.rpc_client()?;
        Ok(ChainFactory::eth_chain_with_client(client)?
            .with_poll_interval(self.mining.poll_interval())
            .with_block_timeout(self.mining.block_timeout()))
    }

    pub fn holder(&self, name: &str) -> crate::Result<&HolderConfig> {
        self.holders
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| InteractError::UnknownHolder(name.to_string()))
    }

    pub fn holder_address(&self, name: &str) -> crate::Result<&str> {
        Ok(self.holder(name)?.address.as_str())
    }

    pub fn submitter(&self) -> crate::Result<&HolderConfig> {
        self.holder(&self.scenario.submitter)
    }

    pub fn confirmers(&self) -> crate::Result<Vec<&HolderConfig>> {
        self.scenario
            .confirmers
            .iter()
            .map(|name| self.holder(name))
            .collect()
    }

    fn validate(&self) -> crate::Result<()> {
        wallet_utils::address::parse_eth_address(&self.contracts.wallet)?;
        wallet_utils::address::parse_eth_address(&self.contracts.token)?;

        let mut seen = std::collections::HashSet::new();
        for holder in &self.holders {
            wallet_utils::address::parse_eth_address(&holder.address)?;
            if !seen.insert(holder.name.as_str()) {
                return Err(InteractError::Config(format!(
                    "duplicate holder name `{}`",
                    holder.name
                )));
            }
        }

        if self.scenario.confirmers.is_empty() {
            return Err(InteractError::Config(
                "scenario.confirmers must name at least one holder".to_string(),
            ));
        }
        if self.scenario.batch_recipients.is_empty() {
            return Err(InteractError::Config(
                "scenario.batch_recipients must name at least one holder".to_string(),
            ));
        }
        if let Some(ids) = &self.scenario.batch_tx_ids {
            if ids.len() != self.scenario.batch_recipients.len() {
                return Err(InteractError::Config(format!(
                    "scenario.batch_tx_ids has {} ids for {} recipients",
                    ids.len(),
                    self.scenario.batch_recipients.len()
                )));
            }
        }

        self.submitter()?;
        self.confirmers()?;
        self.holder(&self.scenario.single_recipient)?;
        for name in &self.scenario.batch_recipients {
            self.holder(name)?;
        }

        wallet_utils::unit::convert_to_u256(
            &self.scenario.transfer_amount,
            self.scenario.token_decimals,
        )?;
        Ok(())
    }
}
