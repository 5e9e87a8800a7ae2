use alloy::primitives::{Address, U256};
use alloy::sol_types::{SolCall, SolValue};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use wallet_chain_interact::eth::protocol::{token, wallet};
use wallet_interactor::{InteractorConfig, PapyrusInteract};
use wallet_utils::{hex_func, init_test_log, unit};
use wiremock::{matchers::method, Mock, MockServer, Request, ResponseTemplate};


pub const COINBASE: &str = "0x00a329c0648769a73afac7f9381e08fb43dbea72";
pub const HOLDER_A: &str = "0x3dcd8ee9ac88a4ba0636b12cb7176569a8b9dc4c";
pub const HOLDER_B: &str = "0xd1f0b9d541a1b3d7498b26e1146247bed6bb55da";
pub const HOLDER_D: &str = "0x2242936ea02b5c029172faaee8d6066755a32394";
pub const HOLDER_E: &str = "0xe9827cac7edbec62e30e45d4f5d5baefef76d376";
pub const TOKEN: &str = "0x0c06ba38df7537e25ded9b3d1fdfeb90dff05f15";
pub const WALLET: &str = "0x3ebb35533aeb4e435997a9c3f6be8cdc78576cbf";

/// Wei charged to the sender of every transaction.
pub const GAS_COST: u64 = 21_000_000_000_000;
pub const FIRST_TX_ID: u64 = 15;

pub fn one_token() -> U256 {
    unit::convert_to_u256("1", 18).unwrap()
}

pub struct WalletTx {
    pub destination: String,
    pub data: Vec<u8>,
    pub confirmations: HashSet<String>,
    pub executed: bool,
}

/// Just enough of a dev chain for the wallet and token contracts.
pub struct NodeState {
    pub block_reads: u64,
    pub start_height: u64,
    pub passwords: HashMap<String, String>,
    pub unlocked: HashSet<String>,
    pub transferable: bool,
    pub required: usize,
    pub eth: HashMap<String, U256>,
    pub tokens: HashMap<String, U256>,
    pub wallet_txs: Vec<WalletTx>,
    pub sent: Vec<(String, String)>,
    pub receipts_requested: Vec<String>,
    /// Miner address and the wei it is paid for every new block.
    pub block_reward: Option<(String, U256)>,
}

impl NodeState {
    fn new() -> Self {
        let passwords = [
            (HOLDER_A, "a-secret"),
            (HOLDER_B, "b-secret"),
            (HOLDER_D, "d-secret"),
            (HOLDER_E, "e-secret"),
        ]
        .into_iter()
        .map(|(a, p)| (a.to_string(), p.to_string()))
        .collect();

        let eth = [HOLDER_A, HOLDER_B, HOLDER_D, HOLDER_E, COINBASE]
            .into_iter()
            .map(|a| (a.to_string(), unit::convert_to_u256("5", 18).unwrap()))
            .collect();

        let mut tokens = HashMap::new();
        tokens.insert(WALLET.to_string(), unit::convert_to_u256("100", 18).unwrap());

        Self {
            block_reads: 0,
            start_height: 1000,
            passwords,
            unlocked: HashSet::from([COINBASE.to_string()]),
            transferable: false,
            required: 2,
            eth,
            tokens,
            wallet_txs: Vec::new(),
            sent: Vec::new(),
            receipts_requested: Vec::new(),
            block_reward: None,
        }
    }

    pub fn token_balance(&self, owner: &str) -> U256 {
        self.tokens.get(owner).copied().unwrap_or_default()
    }

    pub fn senders(&self) -> Vec<String> {
        self.sent.iter().map(|(from, _)| from.clone()).collect()
    }

    fn height(&self) -> u64 {
        self.start_height + self.block_reads / 2
    }

    fn handle(&mut self, rpc_method: &str, params: &Value) -> Result<Value, String> {
        match rpc_method {
            "eth_blockNumber" => {
                let height = self.height();
                self.block_reads += 1;
                if self.height() > height {
                    if let Some((miner, reward)) = self.block_reward.clone() {
                        *self.eth.entry(miner).or_default() += reward;
                    }
                }
                Ok(json!(format!("0x{height:x}")))
            }
            "eth_coinbase" => Ok(json!(COINBASE)),
            "personal_unlockAccount" => {
                let addr = lower(&params[0]);
                let ok = self.passwords.get(&addr).map(String::as_str) == params[1].as_str();
                if ok {
                    self.unlocked.insert(addr);
                }
                Ok(json!(ok))
            }
            "eth_getBalance" => {
                let balance = self.eth.get(&lower(&params[0])).copied().unwrap_or_default();
                Ok(json!(format!("0x{balance:x}")))
            }
            "eth_call" => self.call(&params[0]),
            "eth_sendTransaction" => self.send(&params[0]),
            "eth_getTransactionReceipt" => {
                let hash = params[0].as_str().unwrap_or_default().to_string();
                self.receipts_requested.push(hash.clone());
                Ok(json!({
                    "transactionHash": hash,
                    "blockNumber": format!("0x{:x}", self.height()),
                    "status": "0x1",
                    "gasUsed": "0x5208",
                }))
            }
            other => Err(format!("method {other} not supported")),
        }
    }

    fn call(&self, tx: &Value) -> Result<Value, String> {
        let input = input_of(tx);
        let encoded = match selector(&input) {
            s if s == token::transferableCall::SELECTOR => self.transferable.abi_encode(),
            s if s == wallet::transactionCountCall::SELECTOR => {
                U256::from(FIRST_TX_ID + self.wallet_txs.len() as u64).abi_encode()
            }
            s if s == token::balanceOfCall::SELECTOR => {
                let call = decode::<token::balanceOfCall>(&input)?;
                self.token_balance(&key(&call.owner)).abi_encode()
            }
            _ => return Err("execution reverted".to_string()),
        };
        Ok(json!(hex_func::to_prefixed_hex(encoded)))
    }

    fn send(&mut self, tx: &Value) -> Result<Value, String> {
        let from = lower(&tx["from"]);
        if !self.unlocked.contains(&from) {
            return Err("authentication needed: password or unlock".to_string());
        }
        let to = lower(&tx["to"]);
        let input = input_of(tx);

        let balance = self.eth.entry(from.clone()).or_default();
        *balance = balance.saturating_sub(U256::from(GAS_COST));

        if to == TOKEN && selector(&input) == token::setTransferableCall::SELECTOR {
            let call = decode::<token::setTransferableCall>(&input)?;
            if from == COINBASE {
                self.transferable = call.value;
            }
        } else if to == WALLET {
            self.wallet_call(&from, &input)?;
        }

        let hash = format!("0x{:064x}", self.sent.len() + 1);
        self.sent.push((from, hash.clone()));
        Ok(json!(hash))
    }

    fn wallet_call(&mut self, from: &str, input: &[u8]) -> Result<(), String> {
        let s = selector(input);
        if s == wallet::submitTransactionCall::SELECTOR {
            let call = decode::<wallet::submitTransactionCall>(input)?;
            self.push_tx(key(&call.destination), call.data.to_vec());
        } else if s == wallet::submitTransactionsCall::SELECTOR {
            let call = decode::<wallet::submitTransactionsCall>(input)?;
            for (i, destination) in call.destinations.iter().enumerate() {
                let offset = call.dataOffsets[i].to::<usize>();
                let length = call.dataLengths[i].to::<usize>();
                self.push_tx(key(destination), call.data[offset..offset + length].to_vec());
            }
        } else if s == wallet::confirmTransactionCall::SELECTOR {
            let call = decode::<wallet::confirmTransactionCall>(input)?;
            self.confirm(call.transactionId.to::<u64>(), from);
        } else if s == wallet::confirmTransactionsCall::SELECTOR {
            let call = decode::<wallet::confirmTransactionsCall>(input)?;
            for id in call.transactionIds {
                self.confirm(id.to::<u64>(), from);
            }
        } else {
            return Err("execution reverted".to_string());
        }
        Ok(())
    }

    fn push_tx(&mut self, destination: String, data: Vec<u8>) {
        self.wallet_txs.push(WalletTx {
            destination,
            data,
            confirmations: HashSet::new(),
            executed: false,
        });
    }

    fn confirm(&mut self, id: u64, from: &str) {
        let Some(index) = id.checked_sub(FIRST_TX_ID) else {
            return;
        };
        let Some(tx) = self.wallet_txs.get_mut(index as usize) else {
            return;
        };
        tx.confirmations.insert(from.to_string());
        if tx.executed || tx.confirmations.len() < self.required {
            return;
        }
        tx.executed = true;

        let destination = tx.destination.clone();
        let data = tx.data.clone();
        if destination != TOKEN || !self.transferable {
            return;
        }
        if let Ok(call) = token::transferCall::abi_decode(&data, true) {
            let wallet_balance = self.token_balance(WALLET);
            if wallet_balance >= call.value {
                self.tokens.insert(WALLET.to_string(), wallet_balance - call.value);
                *self.tokens.entry(key(&call.to)).or_default() += call.value;
            }
        }
    }
}

fn decode<C: SolCall>(input: &[u8]) -> Result<C, String> {
    C::abi_decode(input, true).map_err(|e| e.to_string())
}

fn lower(v: &Value) -> String {
    v.as_str().unwrap_or_default().to_lowercase()
}

fn key(addr: &Address) -> String {
    hex_func::to_prefixed_hex(addr.as_slice())
}

fn input_of(tx: &Value) -> Vec<u8> {
    let input = tx["input"].as_str().or(tx["data"].as_str()).unwrap_or("0x");
    hex_func::hex_decode(input).unwrap_or_default()
}

fn selector(input: &[u8]) -> [u8; 4] {
    let mut s = [0u8; 4];
    if input.len() >= 4 {
        s.copy_from_slice(&input[..4]);
    }
    s
}

pub async fn start_node() -> (MockServer, Arc<Mutex<NodeState>>) {
    init_test_log();
    let server = MockServer::start().await;
    let state = Arc::new(Mutex::new(NodeState::new()));

    let node = state.clone();
    Mock::given(method("POST"))
        .respond_with(move |req: &Request| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            let rpc_method = body["method"].as_str().unwrap_or_default().to_string();

            let res = node.lock().unwrap().handle(&rpc_method, &body["params"]);
            let envelope = match res {
                Ok(result) => json!({ "jsonrpc": "2.0", "id": body["id"], "result": result }),
                Err(message) => json!({
                    "jsonrpc": "2.0",
                    "id": body["id"],
                    "error": { "code": -32000, "message": message }
                }),
            };
            ResponseTemplate::new(200).set_body_json(envelope)
        })
        .mount(&server)
        .await;

    (server, state)
}

pub fn config_toml(server: &MockServer) -> String {
    format!(
        r#"
[node]
rpc_url = "{uri}"

[mining]
poll_interval_ms = 5
block_timeout_secs = 5

[contracts]
wallet = "{WALLET}"
token = "{TOKEN}"

[[holders]]
name = "A"
address = "{HOLDER_A}"
password = "a-secret"

[[holders]]
name = "B"
address = "{HOLDER_B}"
password = "b-secret"

[[holders]]
name = "D"
address = "{HOLDER_D}"
password = "d-secret"
unlock_duration_secs = 600

[[holders]]
name = "E"
address = "{HOLDER_E}"
password = "e-secret"

[scenario]
submitter = "A"
confirmers = ["B", "D"]
single_recipient = "D"
batch_recipients = ["D", "E"]
"#,
        uri = server.uri()
    )
}

pub fn interact_with(toml: &str) -> PapyrusInteract {
    let config = InteractorConfig::from_toml_str(toml).unwrap();
    PapyrusInteract::new(config).unwrap()
}

pub fn get_interact(server: &MockServer) -> PapyrusInteract {
    interact_with(&config_toml(server))
}
