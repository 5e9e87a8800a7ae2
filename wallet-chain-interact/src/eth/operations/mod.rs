use alloy::{
    primitives::{self, Bytes},
    rpc::types::{TransactionInput, TransactionRequest},
};

pub mod multisig;
pub use multisig::*;
pub mod token;
pub use token::*;

/// A call into a deployed contract, either sent or evaluated with `eth_call`.
pub struct ContractCallBase {
    pub from: Option<primitives::Address>,
    pub to: primitives::Address,
    pub value: primitives::U256,
}

impl ContractCallBase {
    pub fn new(from: Option<primitives::Address>, to: primitives::Address) -> Self {
        Self {
            from,
            to,
            value: primitives::U256::ZERO,
        }
    }

    // call data goes out as both `input` and `data` so old nodes accept it too
    pub fn request(&self, call_data: Vec<u8>) -> TransactionRequest {
        let input = TransactionInput::both(Bytes::from(call_data));

        let tx = TransactionRequest::default()
            .to(self.to)
            .value(self.value)
            .input(input);

        match self.from {
            Some(from) => tx.from(from),
            None => tx,
        }
    }
}

pub(crate) fn decode_call_data(data: &str) -> crate::Result<Bytes> {
    Ok(Bytes::from(wallet_utils::hex_func::hex_decode(data.trim())?))
}
