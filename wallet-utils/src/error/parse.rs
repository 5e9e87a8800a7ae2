#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("FromHex error: {0}")]
    FromHex(String),
    #[error("ToInt parse error: {0}")]
    ToInt(#[from] std::num::ParseIntError),
    #[error("address convert failed: {0}")]
    AddressConvertFailed(String),
    #[error("unit convert failed{0}")]
    UnitConvertFailed(String),
}
