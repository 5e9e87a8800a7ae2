use super::{decode_call_data, ContractCallBase};
use crate::{eth::protocol::wallet, types};
use alloy::{
    primitives::{self, Bytes},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use wallet_utils::address;

/// One call the wallet executes once enough holders confirm it.
#[derive(Debug, Clone)]
pub struct WalletCall {
    pub destination: primitives::Address,
    pub value: primitives::U256,
    pub data: Bytes,
}

impl WalletCall {
    pub fn new(destination: &str, value: primitives::U256, data: &str) -> crate::Result<Self> {
        Ok(Self {
            destination: address::parse_eth_address(destination)?,
            value,
            data: decode_call_data(data)?,
        })
    }
}

/// `submitTransaction(destination, value, data)` sent by a wallet holder.
pub struct SubmitTransactionOpt {
    pub base: ContractCallBase,
    pub call: WalletCall,
}

impl SubmitTransactionOpt {
    pub fn new(
        from: &str,
        wallet: &str,
        destination: &str,
        value: primitives::U256,
        data: &str,
    ) -> crate::Result<Self> {
        let from = address::parse_eth_address(from)?;
        let wallet = address::parse_eth_address(wallet)?;

        Ok(Self {
            base: ContractCallBase::new(Some(from), wallet),
            call: WalletCall::new(destination, value, data)?,
        })
    }
}

impl types::Transaction<TransactionRequest> for SubmitTransactionOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        let call = wallet::submitTransactionCall {
            destination: self.call.destination,
            value: self.call.value,
            data: self.call.data.clone(),
        };
        Ok(self.base.request(call.abi_encode()))
    }
}

/// The flat layout `submitTransactions` expects: every inner payload concatenated,
/// addressed by byte offset and length.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PackedBatch {
    pub data: Vec<u8>,
    pub offsets: Vec<primitives::U256>,
    pub lengths: Vec<primitives::U256>,
}

pub fn pack_batch<D: AsRef<[u8]>>(datas: &[D]) -> PackedBatch {
    let mut packed = PackedBatch::default();

    for data in datas {
        let data = data.as_ref();
        packed.offsets.push(primitives::U256::from(packed.data.len()));
        packed.lengths.push(primitives::U256::from(data.len()));
        packed.data.extend_from_slice(data);
    }
    packed
}

/// `submitTransactions(...)`, several wallet calls in one submission.
pub struct SubmitTransactionsOpt {
    pub base: ContractCallBase,
    pub calls: Vec<WalletCall>,
}

impl SubmitTransactionsOpt {
    pub fn new(from: &str, wallet: &str) -> crate::Result<Self> {
        let from = address::parse_eth_address(from)?;
        let wallet = address::parse_eth_address(wallet)?;

        Ok(Self {
            base: ContractCallBase::new(Some(from), wallet),
            calls: vec![],
        })
    }

    pub fn with_call(
        mut self,
        destination: &str,
        value: primitives::U256,
        data: &str,
    ) -> crate::Result<Self> {
        self.calls.push(WalletCall::new(destination, value, data)?);
        Ok(self)
    }

    /// Builds from parallel lists; the three lists must line up.
    pub fn with_calls<S: AsRef<str>>(
        mut self,
        destinations: &[S],
        values: &[primitives::U256],
        datas: &[S],
    ) -> crate::Result<Self> {
        if destinations.len() != values.len() || destinations.len() != datas.len() {
            return Err(crate::Error::BatchLengthMismatch {
                destinations: destinations.len(),
                values: values.len(),
                datas: datas.len(),
            });
        }

        for ((destination, value), data) in destinations.iter().zip(values).zip(datas) {
            self.calls.push(WalletCall::new(
                destination.as_ref(),
                *value,
                data.as_ref(),
            )?);
        }
        Ok(self)
    }

    pub fn packed(&self) -> PackedBatch {
        let datas: Vec<&[u8]> = self.calls.iter().map(|c| c.data.as_ref()).collect();
        pack_batch(&datas)
    }
}

impl types::Transaction<TransactionRequest> for SubmitTransactionsOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        if self.calls.is_empty() {
            return Err(crate::Error::EmptyBatch);
        }
        let packed = self.packed();

        let call = wallet::submitTransactionsCall {
            destinations: self.calls.iter().map(|c| c.destination).collect(),
            values: self.calls.iter().map(|c| c.value).collect(),
            dataOffsets: packed.offsets,
            dataLengths: packed.lengths,
            data: packed.data.into(),
        };
        Ok(self.base.request(call.abi_encode()))
    }
}

pub struct ConfirmTransactionOpt {
    pub base: ContractCallBase,
    pub transaction_id: primitives::U256,
}

impl ConfirmTransactionOpt {
    pub fn new(from: &str, wallet: &str, transaction_id: u64) -> crate::Result<Self> {
        let from = address::parse_eth_address(from)?;
        let wallet = address::parse_eth_address(wallet)?;

        Ok(Self {
            base: ContractCallBase::new(Some(from), wallet),
            transaction_id: primitives::U256::from(transaction_id),
        })
    }
}

impl types::Transaction<TransactionRequest> for ConfirmTransactionOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        let call = wallet::confirmTransactionCall {
            transactionId: self.transaction_id,
        };
        Ok(self.base.request(call.abi_encode()))
    }
}

pub struct ConfirmTransactionsOpt {
    pub base: ContractCallBase,
    pub transaction_ids: Vec<primitives::U256>,
}

impl ConfirmTransactionsOpt {
    pub fn new(from: &str, wallet: &str, transaction_ids: &[u64]) -> crate::Result<Self> {
        let from = address::parse_eth_address(from)?;
        let wallet = address::parse_eth_address(wallet)?;

        Ok(Self {
            base: ContractCallBase::new(Some(from), wallet),
            transaction_ids: transaction_ids
                .iter()
                .map(|id| primitives::U256::from(*id))
                .collect(),
        })
    }
}

impl types::Transaction<TransactionRequest> for ConfirmTransactionsOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        if self.transaction_ids.is_empty() {
            return Err(crate::Error::EmptyBatch);
        }
        let call = wallet::confirmTransactionsCall {
            transactionIds: self.transaction_ids.clone(),
        };
        Ok(self.base.request(call.abi_encode()))
    }
}

/// Read-only `transactionCount()`: the id the next submission will receive.
pub struct TransactionCountOpt {
    pub base: ContractCallBase,
}

impl TransactionCountOpt {
    pub fn new(wallet: &str) -> crate::Result<Self> {
        let wallet = address::parse_eth_address(wallet)?;
        Ok(Self {
            base: ContractCallBase::new(None, wallet),
        })
    }
}

impl types::Transaction<TransactionRequest> for TransactionCountOpt {
    fn build_transaction(&self) -> Result<TransactionRequest, crate::Error> {
        Ok(self
            .base
            .request(wallet::transactionCountCall {}.abi_encode()))
    }
}
