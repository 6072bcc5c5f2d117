// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use http::{HeaderMap, HeaderValue, header};
use jsonrpsee::core::{ClientError, client::ClientT as _};
use tracing::debug;
use url::Url;

use super::Request;
use crate::lotus_json::HasLotusJson;
use crate::rpc_client::ApiInfo;

/// The versioned JSON-RPC path served by Lotus-compatible nodes.
pub const RPC_V1_PATH: &str = "/rpc/v1";

/// A JSON-RPC client over HTTP(S) or WebSocket, chosen by URL scheme.
pub struct Client {
    url: Url,
    inner: ClientInner,
}

enum ClientInner {
    Ws(jsonrpsee::ws_client::WsClient),
    Https(jsonrpsee::http_client::HttpClient),
}

impl Client {
    /// Connects to the node described by `api_info`. An explicit `token` takes
    /// precedence over the one embedded in `api_info`.
    pub async fn from_api_info(
        api_info: &ApiInfo,
        token: Option<&str>,
    ) -> Result<Self, ClientError> {
        let mut url = api_info
            .url()
            .map_err(|e| ClientError::Custom(e.to_string()))?;
        url.set_path(RPC_V1_PATH);
        Self::from_url(url, token.or(api_info.token.as_deref())).await
    }

    pub async fn from_url(url: Url, token: Option<&str>) -> Result<Self, ClientError> {
        let headers = match token {
            Some(it) => HeaderMap::from_iter([(
                header::AUTHORIZATION,
                match HeaderValue::from_str(&format!("Bearer {it}")) {
                    Ok(it) => it,
                    Err(e) => {
                        return Err(ClientError::Custom(format!(
                            "Invalid authorization token: {e}"
                        )));
                    }
                },
            )]),
            None => Default::default(),
        };
        let inner = match url.scheme() {
            "ws" | "wss" => ClientInner::Ws(
                jsonrpsee::ws_client::WsClientBuilder::new()
                    .set_headers(headers)
                    .build(&url)
                    .await?,
            ),
            "http" | "https" => ClientInner::Https(
                jsonrpsee::http_client::HttpClientBuilder::new()
                    .set_headers(headers)
                    .build(&url)?,
            ),
            it => return Err(ClientError::Custom(format!("Unsupported URL scheme: {it}"))),
        };
        Ok(Self { url, inner })
    }

    pub fn base_url(&self) -> &Url {
        &self.url
    }

    pub async fn call<T: HasLotusJson + Send>(&self, req: Request<T>) -> Result<T, ClientError> {
        let method_name = req.method_name;
        debug!("calling {method_name} on {}", self.url);
        let result = match &self.inner {
            ClientInner::Ws(it) => it.request::<T::LotusJson, _>(method_name, req).await,
            ClientInner::Https(it) => it.request::<T::LotusJson, _>(method_name, req).await,
        };
        if let Err(e) = &result {
            debug!("{method_name} failed: {e}");
        }
        result.map(HasLotusJson::from_lotus_json)
    }
}
