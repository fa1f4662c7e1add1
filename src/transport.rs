// ----------------------------------------------------------------------------
// This source code contains derived artifacts from seanmonstar's `reqwest`.
// for further information(including license information),
// please visit their repository: https://github.com/seanmonstar/reqwest .
// ----------------------------------------------------------------------------
use async_trait::async_trait;
use http::header::{AUTHORIZATION, USER_AGENT};
use reqwest::Client as ReqwestClient;
use tracing::{debug, warn};
use url::Url;

use crate::{Error, Result};

/// User agent sent by [`HttpTransport::new`]. Discogs rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("discogs-oauth/", env!("CARGO_PKG_VERSION"));

/// A single GET issued on behalf of the OAuth handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: Url,
    /// Value of the `Authorization` header, if any.
    pub authorization: Option<String>,
    /// The request must go out immediately, bypassing any queue the transport keeps.
    pub skip_queueing: bool,
    /// Whether the body should be treated as JSON. Handshake bodies are form-encoded.
    pub parse_json: bool,
}

impl TransportRequest {
    pub fn handshake(url: Url, authorization: String) -> Self {
        TransportRequest {
            url,
            authorization: Some(authorization),
            skip_queueing: true,
            parse_json: false,
        }
    }
}

/// The HTTP collaborator the handshake talks through.
///
/// Implementations return the raw response body. Timeouts, retries and
/// queuing, if any, are theirs to handle.
#[async_trait]
pub trait Transport {
    async fn get(&self, request: TransportRequest) -> Result<String>;
}

#[async_trait]
impl<T> Transport for &T
where
    T: Transport + Sync + ?Sized,
{
    async fn get(&self, request: TransportRequest) -> Result<String> {
        (**self).get(request).await
    }
}

/// [`Transport`] over a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: ReqwestClient,
    user_agent: String,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ReqwestClient> for HttpTransport {
    fn from(client: ReqwestClient) -> Self {
        HttpTransport::new_with_client(client)
    }
}

impl HttpTransport {
    /// Constructs a new `HttpTransport`.
    ///
    /// This method calls reqwest::Client::new() internally.
    pub fn new() -> Self {
        Self::new_with_client(ReqwestClient::new())
    }

    /// Constructs a new `HttpTransport` with specifying inner `reqwest::Client`.
    pub fn new_with_client(client: ReqwestClient) -> Self {
        HttpTransport {
            inner: client,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Replace the `User-Agent` header value.
    pub fn user_agent<T: Into<String>>(self, user_agent: T) -> Self {
        HttpTransport {
            user_agent: user_agent.into(),
            ..self
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: TransportRequest) -> Result<String> {
        debug!(url = %request.url, "sending handshake request");
        let mut builder = self
            .inner
            .get(request.url.clone())
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(ref authorization) = request.authorization {
            builder = builder.header(AUTHORIZATION, authorization.as_str());
        }

        let response = builder.send().await.map_err(|err| {
            warn!(url = %request.url, error = %err, "handshake request failed");
            Error::from(err)
        })?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(url = %request.url, status = status.as_u16(), "handshake request rejected");
            return Err(Error::Http {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}
