use super::ContractCallBase;
use crate::{eth::protocol::token, types};
use alloy::{primitives, rpc::types::TransactionRequest, sol_types::SolCall};
use wallet_utils::{address, hex_func};

/// `setTransferable(flag)` sent from `from` (normally the node's coinbase).
pub struct SetTransferableOpt {
    pub base: ContractCallBase,
    pub transferable: bool,
}

impl SetTransferableOpt {
    pub fn new(from: &str, token: &str, transferable: bool) -> crate::Result<Self> {
        let from = address::parse_eth_address(from)?;
        let token = address::parse_eth_address(token)?;

        Ok(Self {
            base: ContractCallBase::new(Some(from), token),
            transferable,
        })
    }
}

impl types::Transaction<TransactionRequest> for SetTransferableOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        let call = token::setTransferableCall {
            value: self.transferable,
        };
        Ok(self.base.request(call.abi_encode()))
    }
}

pub struct TransferableOpt {
    pub base: ContractCallBase,
}

impl TransferableOpt {
    pub fn new(token: &str) -> crate::Result<Self> {
        let token = address::parse_eth_address(token)?;
        Ok(Self {
            base: ContractCallBase::new(None, token),
        })
    }
}

impl types::Transaction<TransactionRequest> for TransferableOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        Ok(self.base.request(token::transferableCall {}.abi_encode()))
    }
}

pub struct TokenBalanceOpt {
    pub base: ContractCallBase,
    pub owner: primitives::Address,
}

impl TokenBalanceOpt {
    pub fn new(token: &str, owner: &str) -> crate::Result<Self> {
        let token = address::parse_eth_address(token)?;
        let owner = address::parse_eth_address(owner)?;
        Ok(Self {
            base: ContractCallBase::new(None, token),
            owner,
        })
    }
}

impl types::Transaction<TransactionRequest> for TokenBalanceOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        let call = token::balanceOfCall { owner: self.owner };
        Ok(self.base.request(call.abi_encode()))
    }
}

/// Hex call data for `transfer(to, amount)`, the payload wallet submissions carry.
pub fn token_transfer_data(to: &str, amount: primitives::U256) -> crate::Result<String> {
    let to = address::parse_eth_address(to)?;
    let call = token::transferCall { to, value: amount };
    Ok(hex_func::to_prefixed_hex(call.abi_encode()))
}
