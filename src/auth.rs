//! Authentication descriptors: the OAuth session state and the token-based
//! Discogs credentials.

use std::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

use crate::{PreconditionError, Secrets};

/// How far an authentication has progressed.
///
/// Serialized as the integers `0`, `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AuthLevel {
    /// Nothing usable yet.
    None = 0,
    /// A request token was issued and awaits user authorization, or only
    /// application credentials are known.
    RequestToken = 1,
    /// Fully authorized on behalf of a user.
    AccessToken = 2,
}

impl Default for AuthLevel {
    fn default() -> Self {
        AuthLevel::None
    }
}

impl From<AuthLevel> for u8 {
    fn from(level: AuthLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for AuthLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AuthLevel::None),
            1 => Ok(AuthLevel::RequestToken),
            2 => Ok(AuthLevel::AccessToken),
            other => Err(format!("invalid authorization level {}", other)),
        }
    }
}

impl fmt::Display for AuthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Any authentication descriptor a client may be handed, tagged by `method`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Auth {
    OAuth(OAuthAuth),
    Discogs(DiscogsAuth),
}

impl Auth {
    pub fn level(&self) -> AuthLevel {
        match self {
            Auth::OAuth(auth) => auth.level,
            Auth::Discogs(auth) => auth.level(),
        }
    }
}

/// State of an OAuth 1.0a session.
///
/// `authorize_url` is set exactly while `level` is [`AuthLevel::RequestToken`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthAuth {
    pub level: AuthLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize_url: Option<String>,
}

impl OAuthAuth {
    pub fn new() -> Self {
        Default::default()
    }

    /// Overlay `other` onto `self`: its level always wins, its `Some` fields replace ours.
    pub fn merge(self, other: OAuthAuth) -> Self {
        OAuthAuth {
            level: other.level,
            consumer_key: other.consumer_key.or(self.consumer_key),
            consumer_secret: other.consumer_secret.or(self.consumer_secret),
            token: other.token.or(self.token),
            token_secret: other.token_secret.or(self.token_secret),
            authorize_url: other.authorize_url.or(self.authorize_url),
        }
    }

    /// Credentials for signing: consumer pair plus the token pair when both halves are known.
    ///
    /// # Errors
    ///
    /// [`PreconditionError::MissingConsumerCredentials`] when the consumer key
    /// or secret is absent or empty.
    pub fn secrets(&self) -> Result<Secrets<'_>, PreconditionError> {
        let consumer_key = non_empty(&self.consumer_key);
        let consumer_secret = non_empty(&self.consumer_secret);
        let (consumer_key, consumer_secret) = match (consumer_key, consumer_secret) {
            (Some(key), Some(secret)) => (key, secret),
            _ => return Err(PreconditionError::MissingConsumerCredentials),
        };
        let secrets = Secrets::new(consumer_key, consumer_secret);
        match (self.token.as_deref(), self.token_secret.as_deref()) {
            (Some(token), Some(token_secret)) => Ok(secrets.token(token, token_secret)),
            _ => Ok(secrets),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Token-based Discogs credentials: a personal user token, or an
/// application's consumer key and secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscogsAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_secret: Option<String>,
}

impl DiscogsAuth {
    pub fn user_token<T: Into<String>>(token: T) -> Self {
        DiscogsAuth {
            user_token: Some(token.into()),
            ..Default::default()
        }
    }

    pub fn consumer<TKey, TSecret>(consumer_key: TKey, consumer_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        DiscogsAuth {
            user_token: None,
            consumer_key: Some(consumer_key.into()),
            consumer_secret: Some(consumer_secret.into()),
        }
    }

    pub fn level(&self) -> AuthLevel {
        if non_empty(&self.user_token).is_some() {
            AuthLevel::AccessToken
        } else if non_empty(&self.consumer_key).is_some()
            && non_empty(&self.consumer_secret).is_some()
        {
            AuthLevel::RequestToken
        } else {
            AuthLevel::None
        }
    }

    /// `Authorization` header value, `None` when no credential is set.
    ///
    /// A user token takes precedence over the consumer pair.
    pub fn to_header(&self) -> Option<String> {
        if let Some(token) = non_empty(&self.user_token) {
            return Some(format!("Discogs token={}", token));
        }
        match (non_empty(&self.consumer_key), non_empty(&self.consumer_secret)) {
            (Some(key), Some(secret)) => Some(format!("Discogs key={}, secret={}", key, secret)),
            _ => None,
        }
    }
}
