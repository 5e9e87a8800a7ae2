use crate::{types::RpcResult, TransportError};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    async fn send_text(self) -> Result<String, TransportError> {
        let res = self
            .0
            .send()
            .await
            .map_err(|e| TransportError::Utils(wallet_utils::Error::Http(e.into())))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| TransportError::Utils(wallet_utils::Error::Http(e.into())))?;

        if !status.is_success() {
            tracing::warn!("[rpc response] status = {status} body = {text}");
            return Err(TransportError::NodeResponseError(text));
        }
        tracing::debug!("[rpc response] = {}", text);

        Ok(text)
    }

    /// Decodes the envelope; a `null` result is `Ok(None)`.
    pub async fn send_json_rpc_opt<T: DeserializeOwned>(self) -> Result<Option<T>, TransportError> {
        let response_str = self.send_text().await?;

        let rpc_result = wallet_utils::serde_func::serde_from_str::<RpcResult<T>>(&response_str)?;
        if let Some(err) = rpc_result.error {
            return Err(TransportError::RpcError {
                code: err.code,
                message: err.message,
            });
        }

        Ok(rpc_result.result)
    }

    pub async fn send_json_rpc<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        match self.send_json_rpc_opt::<T>().await? {
            Some(res) => Ok(res),
            None => Err(TransportError::EmptyResult),
        }
    }
}
