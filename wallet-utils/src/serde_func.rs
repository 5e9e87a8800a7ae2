pub fn serde_from_str<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, crate::Error> {
    serde_json::from_str::<T>(value).map_err(|e| {
        crate::Error::Serde(crate::error::serde::SerdeError::Deserialize(format!(
            "error = {} value = {}",
            e, value
        )))
    })
}

pub fn toml_from_str<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, crate::Error> {
    toml::from_str::<T>(value).map_err(|e| crate::Error::Serde(e.into()))
}
