use crate::{errors::TransportError, request_builder::ReqBuilder, types::JsonRpcParams};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::{collections::HashMap, fmt::Debug, str::FromStr, time::Duration};
use wallet_utils::HttpError;

pub struct RpcClient {
    base_url: String,
    client: reqwest::Client,
    base_auth: Option<BaseAuth>,
}

pub struct BaseAuth {
    name: String,
    password: Option<String>,
}

impl RpcClient {
    pub fn new(
        base_url: &str,
        header_opt: Option<HashMap<String, String>>,
    ) -> Result<Self, TransportError> {
        Self::build(base_url, header_opt, None, None)
    }

    pub fn new_with_base_auth(
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, TransportError> {
        let base_auth = BaseAuth {
            name: username.to_owned(),
            password: Some(password.to_owned()),
        };
        Self::build(base_url, None, Some(base_auth), None)
    }

    /// Full constructor used by configured clients.
    pub fn build(
        base_url: &str,
        header_opt: Option<HashMap<String, String>>,
        base_auth: Option<BaseAuth>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let headers = default_headers(header_opt)?;

        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Utils(wallet_utils::Error::Http(e.into())))?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
            base_auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_params<T: Serialize + Debug>(&self, p: T) -> ReqBuilder {
        tracing::debug!("[rpc request] = {:?}", p);
        tracing::debug!("[url] = {:?}", self.base_url);
        let build = if let Some(auth) = &self.base_auth {
            self.client
                .post(&self.base_url)
                .basic_auth(&auth.name, auth.password.clone())
                .json(&p)
        } else {
            self.client.post(&self.base_url).json(&p)
        };

        ReqBuilder(build)
    }

    /// Same as `set_params` but keeps the params (passwords) out of the log.
    pub fn set_sensitive_params<T: Serialize + Debug>(&self, p: JsonRpcParams<T>) -> ReqBuilder {
        tracing::debug!("[rpc request] method = {} params = <redacted>", p.get_method());
        let build = if let Some(auth) = &self.base_auth {
            self.client
                .post(&self.base_url)
                .basic_auth(&auth.name, auth.password.clone())
                .json(&p)
        } else {
            self.client.post(&self.base_url).json(&p)
        };

        ReqBuilder(build)
    }
}

impl BaseAuth {
    pub fn new(name: &str, password: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            password: password.map(ToOwned::to_owned),
        }
    }
}

fn default_headers(header_opt: Option<HashMap<String, String>>) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();

    headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.append(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    if let Some(opt) = header_opt {
        for (key, value) in opt {
            let name = HeaderName::from_str(&key).map_err(|_| invalid_header(&key))?;
            let value = HeaderValue::from_str(&value).map_err(|_| invalid_header(&key))?;
            headers.append(name, value);
        }
    };
    Ok(headers)
}

fn invalid_header(key: &str) -> TransportError {
    TransportError::Utils(wallet_utils::Error::Http(HttpError::InvalidHeader(
        key.to_string(),
    )))
}
