use crate::error::parse::ParseError;

pub fn strip_hex_prefix(hex_str: &str) -> &str {
    hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str)
}

pub fn hex_decode(hex_str: &str) -> Result<Vec<u8>, crate::Error> {
    hex::decode(strip_hex_prefix(hex_str)).map_err(|e| {
        crate::Error::Parse(ParseError::FromHex(format!(
            "hex decode error: {e} value = {hex_str}"
        )))
    })
}

pub fn to_prefixed_hex<T: AsRef<[u8]>>(data: T) -> String {
    format!("0x{}", hex::encode(data))
}
