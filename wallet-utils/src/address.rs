use crate::error::parse::ParseError;
use alloy::primitives;
use std::str::FromStr;

pub fn parse_eth_address(address: &str) -> Result<primitives::Address, crate::Error> {
    primitives::Address::from_str(address.trim()).map_err(|e| {
        crate::Error::Parse(ParseError::AddressConvertFailed(format!(
            "to_eth_address err:{}:address = {}",
            e, address
        )))
    })
}
