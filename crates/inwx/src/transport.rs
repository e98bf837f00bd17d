//! HTTP transport and the RPC invoker built on it.
//!
//! [`Transport`] is the seam between the adapter and the network: one POST of
//! a JSON body, returning the raw status and body. [`ReqwestTransport`] is the
//! production implementation; it owns a cookie jar so the cookies set by
//! `account.login` are replayed on every later request.
//!
//! [`RpcClient`] turns a method and its parameters into exactly one round
//! trip: encode, POST, check the HTTP status, decode, check the provider code.
//! There is no retry and no timeout beyond the HTTP client's defaults.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn, Instrument};

use crate::codec::{self, Method};
use crate::error::{InwxError, Result};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

/// Raw HTTP reply: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Creates a reply.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for statuses in `200..300`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST request.
///
/// Implementations must keep session cookies between calls: cookies set by
/// any response are sent with every subsequent request on the same transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` (a JSON document) to `endpoint`.
    async fn post(&self, endpoint: &Url, body: Vec<u8>) -> Result<HttpReply>;
}

/// [`Transport`] backed by a [`reqwest::Client`] with its own cookie jar.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    jar: Arc<Jar>,
}

impl ReqwestTransport {
    /// Creates a transport with an empty cookie jar.
    pub fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self { client, jar })
    }

    /// Returns the cookie jar holding the session cookies.
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, endpoint: &Url, body: Vec<u8>) -> Result<HttpReply> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpReply::new(status, body.to_vec()))
    }
}

// ---------------------------------------------------------------------------
// RPC invoker
// ---------------------------------------------------------------------------

/// Issues RPC calls against one endpoint over one [`Transport`].
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn Transport>,
    endpoint: Url,
}

impl RpcClient {
    /// Creates an invoker for `endpoint`.
    pub fn new(transport: Arc<dyn Transport>, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Returns the endpoint calls are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Calls `method` within an established session and returns its payload.
    ///
    /// A reply without `resData` yields `R::default()`.
    pub async fn invoke<P, R>(&self, session: &Session, method: Method, params: &P) -> Result<R>
    where
        P: Serialize + Sync,
        R: DeserializeOwned + Default,
    {
        let span = tracing::debug_span!("inwx_rpc", method = %method, user = %session.username());
        self.call(method, params).instrument(span).await
    }

    /// Performs one round trip without requiring a session. Only the session
    /// manager calls this directly, for `account.login`.
    pub(crate) async fn call<P, R>(&self, method: Method, params: &P) -> Result<R>
    where
        P: Serialize + Sync,
        R: DeserializeOwned + Default,
    {
        let body = codec::encode(method, params)?;
        debug!(method = %method, bytes = body.len(), "sending RPC request");

        let reply = self.transport.post(&self.endpoint, body).await?;
        if !reply.is_success() {
            let reason = StatusCode::from_u16(reply.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or_default()
                .to_string();
            warn!(method = %method, status = reply.status, "RPC request rejected at HTTP level");
            return Err(InwxError::HttpStatus {
                status: reply.status,
                reason,
            });
        }

        let response = codec::decode::<R>(&reply.body)?;
        debug!(method = %method, code = response.code, "received RPC response");
        if !response.is_success() {
            warn!(
                method = %method,
                code = response.code,
                reason_code = %response.reason_code,
                "provider reported failure"
            );
        }

        Ok(response.into_result()?.unwrap_or_default())
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
