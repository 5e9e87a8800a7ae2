use serde::Deserialize;

/// Receipt fields the interactor looks at. `status` is absent on pre-Byzantium chains.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptStatus {
    pub transaction_hash: String,
    pub block_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub gas_used: String,
}

impl ReceiptStatus {
    pub fn succeeded(&self) -> Option<bool> {
        self.status
            .as_deref()
            .map(|s| wallet_utils::unit::parse_quantity_u64(s).unwrap_or(0) == 1)
    }

    pub fn block_number(&self) -> crate::Result<Option<u64>> {
        self.block_number
            .as_deref()
            .map(wallet_utils::unit::parse_quantity_u64)
            .transpose()
            .map_err(Into::into)
    }

    pub fn gas_used(&self) -> crate::Result<u64> {
        Ok(wallet_utils::unit::parse_quantity_u64(&self.gas_used)?)
    }
}
