use std::str::FromStr;

use http::Method;
use tracing::{debug, instrument};
use url::Url;

use crate::encode::percent_encode;
use crate::token_reader::read_oauth_token;
use crate::{
    Auth, AuthLevel, ConfigOverrides, Endpoint, HttpTransport, OAuthAuth, OAuthConfig,
    OAuthParameters, PreconditionError, Result, SignError, Signer, Transport, TransportRequest,
    OAUTH_TOKEN_KEY,
};

/// An OAuth 1.0a session against Discogs.
///
/// Drives the request-token / access-token handshake through a [`Transport`]
/// and signs requests with whatever credentials the session currently holds.
///
/// ```no_run
/// # async fn run() -> discogs_oauth::Result<()> {
/// use discogs_oauth::DiscogsOAuth;
///
/// let mut oauth = DiscogsOAuth::default();
/// let auth = oauth
///     .request_token("[CONSUMER_KEY]", "[CONSUMER_SECRET]", "https://example.com/callback")
///     .await?;
/// println!("please visit: {}", auth.authorize_url.as_deref().unwrap_or_default());
///
/// // ...the user comes back with a verifier
/// let auth = oauth.access_token("[VERIFIER]").await?;
/// println!("authorized at level {}", auth.level);
///
/// let header = oauth.to_header("GET", "https://api.discogs.com/oauth/identity")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DiscogsOAuth<T = HttpTransport> {
    transport: T,
    config: OAuthConfig,
    auth: OAuthAuth,
}

impl Default for DiscogsOAuth<HttpTransport> {
    fn default() -> Self {
        DiscogsOAuth::new(HttpTransport::new(), None)
    }
}

/// A request ready to send: method, absolute url and `Authorization` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: Method,
    pub url: Url,
    pub authorization: String,
}

impl<T> DiscogsOAuth<T>
where
    T: Transport,
{
    /// Start a session.
    ///
    /// An [`Auth::OAuth`] descriptor (for instance one persisted from
    /// [`export_auth`](Self::export_auth)) is merged onto a fresh session;
    /// any other descriptor is ignored.
    pub fn new(transport: T, auth: Option<Auth>) -> Self {
        let auth = match auth {
            Some(Auth::OAuth(auth)) => OAuthAuth::new().merge(auth),
            _ => OAuthAuth::new(),
        };
        DiscogsOAuth {
            transport,
            config: OAuthConfig::default(),
            auth,
        }
    }

    /// Override parts of the configuration, e.g. to go through a proxy.
    ///
    /// # Errors
    ///
    /// Fails when the overrides carry a version other than `1.0`; the current
    /// configuration is kept.
    pub fn set_config(&mut self, overrides: ConfigOverrides) -> Result<&mut Self> {
        self.config = self.config.with_overrides(overrides)?;
        Ok(self)
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// The whole session state, for inspection or persistence.
    pub fn export_auth(&self) -> &OAuthAuth {
        &self.auth
    }

    pub fn into_auth(self) -> OAuthAuth {
        self.auth
    }

    /// Step one of the handshake: obtain a request token.
    ///
    /// On success the session holds the consumer credentials, the request
    /// token and secret, an `authorize_url` to send the user to, and
    /// `level` [`AuthLevel::RequestToken`]. On failure it is left untouched.
    #[instrument(skip(self, consumer_key, consumer_secret))]
    pub async fn request_token(
        &mut self,
        consumer_key: &str,
        consumer_secret: &str,
        callback_url: &str,
    ) -> Result<&OAuthAuth> {
        require("consumer_key", consumer_key)?;
        require("consumer_secret", consumer_secret)?;
        require("callback_url", callback_url)?;
        if self.auth.level == AuthLevel::AccessToken {
            return Err(PreconditionError::AlreadyAuthorized.into());
        }

        let mut pending = OAuthAuth {
            level: self.auth.level,
            consumer_key: Some(consumer_key.to_string()),
            consumer_secret: Some(consumer_secret.to_string()),
            ..OAuthAuth::new()
        };
        let parameters = self.header_parameters().callback(callback_url);
        let body = self
            .fetch(&pending, &self.config.request_token_url, parameters)
            .await?;
        let token = read_oauth_token(&body)?;

        pending.authorize_url = Some(format!(
            "{}?{}={}",
            self.config.authorize_url,
            OAUTH_TOKEN_KEY,
            percent_encode(&token.oauth_token)
        ));
        pending.token = Some(token.oauth_token);
        pending.token_secret = Some(token.oauth_token_secret);
        pending.level = AuthLevel::RequestToken;
        debug!(level = %pending.level, "request token acquired");

        self.auth = pending;
        Ok(&self.auth)
    }

    /// Step three of the handshake: trade the user's verifier for an access token.
    ///
    /// The request is signed with the request token held by the session. On
    /// success the token pair is replaced, `level` becomes
    /// [`AuthLevel::AccessToken`] and `authorize_url` is cleared. On failure the
    /// session is left untouched.
    #[instrument(skip(self, verifier))]
    pub async fn access_token(&mut self, verifier: &str) -> Result<&OAuthAuth> {
        require("verifier", verifier)?;
        if self.auth.level != AuthLevel::RequestToken
            || self.auth.token.is_none()
            || self.auth.token_secret.is_none()
        {
            return Err(PreconditionError::MissingRequestToken.into());
        }

        let parameters = self.header_parameters().verifier(verifier);
        let body = self
            .fetch(&self.auth, &self.config.access_token_url, parameters)
            .await?;
        let token = read_oauth_token(&body)?;

        let mut authorized = self.auth.clone();
        authorized.token = Some(token.oauth_token);
        authorized.token_secret = Some(token.oauth_token_secret);
        authorized.level = AuthLevel::AccessToken;
        authorized.authorize_url = None;
        debug!(level = %authorized.level, "access token acquired");

        self.auth = authorized;
        Ok(&self.auth)
    }

    // oauth_callback / oauth_verifier travel in `parameters`, never in the query
    async fn fetch(
        &self,
        auth: &OAuthAuth,
        url: &str,
        parameters: OAuthParameters<'_>,
    ) -> Result<String> {
        let url = parse_url(url)?;
        let authorization = sign(auth, &Method::GET, &url, parameters)?;
        debug!(%url, "issuing handshake request");
        self.transport
            .get(TransportRequest::handshake(url, authorization))
            .await
    }
}

impl<T> DiscogsOAuth<T> {
    /// `Authorization` header value for a `method` request to `url`, with a
    /// fresh nonce and the current timestamp.
    ///
    /// # Errors
    ///
    /// Fails without consumer credentials, or when `method` or `url` do not parse.
    pub fn to_header(&self, method: &str, url: &str) -> Result<String> {
        self.to_header_with_params(method, url, self.header_parameters())
    }

    /// Same as [`to_header`](Self::to_header) with explicit protocol parameters.
    pub fn to_header_with_params(
        &self,
        method: &str,
        url: &str,
        parameters: OAuthParameters<'_>,
    ) -> Result<String> {
        let method = Method::from_str(method)
            .map_err(|_| SignError::InvalidMethod(method.to_string()))?;
        sign(&self.auth, &method, &parse_url(url)?, parameters)
    }

    /// Protocol parameters every header of this session starts from.
    pub fn header_parameters(&self) -> OAuthParameters<'static> {
        OAuthParameters::new()
            .signature_method(self.config.signature_method)
            .version(true)
    }

    /// Sign a call to `endpoint` under `base_url`.
    ///
    /// # Errors
    ///
    /// [`PreconditionError::InsufficientLevel`] when the session has not reached
    /// the level the endpoint requires.
    pub fn sign_endpoint(&self, base_url: &str, endpoint: &Endpoint) -> Result<SignedRequest> {
        if self.auth.level < endpoint.required_level {
            return Err(PreconditionError::InsufficientLevel {
                required: endpoint.required_level,
                current: self.auth.level,
            }
            .into());
        }
        let url = parse_url(&endpoint.url(base_url))?;
        let authorization = sign(&self.auth, &endpoint.method, &url, self.header_parameters())?;
        Ok(SignedRequest {
            method: endpoint.method.clone(),
            url,
            authorization,
        })
    }
}

fn sign(
    auth: &OAuthAuth,
    method: &Method,
    url: &Url,
    parameters: OAuthParameters<'_>,
) -> Result<String> {
    let secrets = auth.secrets()?;
    Ok(Signer::new(&secrets, parameters).generate_signature(method, url)?)
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|err| SignError::InvalidUrl(url.to_string(), err).into())
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(PreconditionError::EmptyArgument(name).into())
    } else {
        Ok(())
    }
}
