use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use wallet_chain_interact::{eth::EthChain, factory::ChainFactory};
use wallet_utils::init_test_log;
use wiremock::{
    matchers::{body_partial_json, method},
    Mock, MockServer, Request, ResponseTemplate,
};


pub const HOLDER_A: &str = "0x3dcd8ee9ac88a4ba0636b12cb7176569a8b9dc4c";
pub const HOLDER_B: &str = "0xd1f0b9d541a1b3d7498b26e1146247bed6bb55da";
pub const HOLDER_D: &str = "0x2242936ea02b5c029172faaee8d6066755a32394";
pub const TOKEN: &str = "0x0c06ba38df7537e25ded9b3d1fdfeb90dff05f15";
pub const WALLET: &str = "0x3ebb35533aeb4e435997a9c3f6be8cdc78576cbf";

pub fn rpc_ok(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "jsonrpc": "2.0", "id": 1, "result": result }))
}

pub fn rpc_err(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": code, "message": message }
    }))
}

pub async fn respond_with(server: &MockServer, rpc_method: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Block height advances by one every `reads_per_block` reads of `eth_blockNumber`.
pub async fn mine_every(server: &MockServer, start: u64, reads_per_block: u64) -> Arc<AtomicU64> {
    let reads = Arc::new(AtomicU64::new(0));
    let counter = reads.clone();

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "eth_blockNumber" })))
        .respond_with(move |_: &Request| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let height = if reads_per_block == 0 {
                start
            } else {
                start + n / reads_per_block
            };
            rpc_ok(json!(format!("0x{height:x}")))
        })
        .mount(server)
        .await;
    reads
}

pub fn get_chain(server: &MockServer) -> EthChain {
    init_test_log();
    ChainFactory::eth_chain(&server.uri(), None)
        .unwrap()
        .with_poll_interval(Duration::from_millis(5))
}

pub async fn rpc_bodies(server: &MockServer, rpc_method: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| serde_json::from_slice::<Value>(&r.body).ok())
        .filter(|body| body["method"] == rpc_method)
        .collect()
}

pub fn call_input(tx: &Value) -> Vec<u8> {
    let input = tx["input"].as_str().or(tx["data"].as_str()).unwrap();
    wallet_utils::hex_func::hex_decode(input).unwrap()
}
