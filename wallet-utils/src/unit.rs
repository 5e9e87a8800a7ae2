use crate::error::parse;
use crate::error::Error;
use std::str::FromStr;

use alloy::primitives::{
    utils::{format_units, parse_units, ParseUnits},
    U256,
};

pub fn convert_to_u256(value: &str, unit: u8) -> Result<U256, crate::Error> {
    Ok(parse_units(value, unit)
        .map_err(|e| {
            Error::Parse(parse::ParseError::UnitConvertFailed(format!(
                "convert_to_u256() value = {},unit = {} error:{}",
                value, unit, e
            )))
        })?
        .into())
}

pub fn u256_from_str(value: &str) -> Result<U256, crate::Error> {
    U256::from_str(value.trim()).map_err(|e| {
        Error::Parse(parse::ParseError::UnitConvertFailed(format!(
            " u256_from_str() value = {},error = {}",
            value, e
        )))
    })
}

/// Parses an RPC quantity such as `0x1b4`.
pub fn parse_quantity_u64(value: &str) -> Result<u64, crate::Error> {
    let digits = crate::hex_func::strip_hex_prefix(value.trim());
    if digits.is_empty() {
        return Err(Error::Parse(parse::ParseError::UnitConvertFailed(format!(
            " parse_quantity_u64() empty quantity value = {value}"
        ))));
    }
    Ok(u64::from_str_radix(digits, 16).map_err(parse::ParseError::ToInt)?)
}

pub fn format_to_string<T: Into<ParseUnits>>(value: T, unit: u8) -> Result<String, crate::Error> {
    let res = format_units(value, unit).map_err(|e| {
        Error::Parse(parse::ParseError::UnitConvertFailed(format!(
            "format_to_string() from str error:{}",
            e
        )))
    })?;
    if !res.contains('.') {
        return Ok(res);
    }
    let res = res.trim_end_matches('0').trim_end_matches('.');
    Ok(res.to_string())
}
