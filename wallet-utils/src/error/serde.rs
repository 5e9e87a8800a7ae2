#[derive(Debug, thiserror::Error)]
pub enum SerdeError {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(" deserialize error: {0}")]
    Deserialize(String),
}
