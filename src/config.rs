use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{SignError, SignResult};

pub const DEFAULT_REQUEST_TOKEN_URL: &str = "https://api.discogs.com/oauth/request_token";
pub const DEFAULT_ACCESS_TOKEN_URL: &str = "https://api.discogs.com/oauth/access_token";
pub const DEFAULT_AUTHORIZE_URL: &str = "https://www.discogs.com/oauth/authorize";
/// The only `oauth_version` OAuth 1.0a allows.
pub const OAUTH_VERSION: &str = "1.0";

/// Signature methods a session can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureMethodKind {
    #[serde(rename = "PLAINTEXT")]
    Plaintext,
    #[serde(rename = "HMAC-SHA1")]
    HmacSha1,
}

impl SignatureMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethodKind::Plaintext => "PLAINTEXT",
            SignatureMethodKind::HmacSha1 => "HMAC-SHA1",
        }
    }
}

impl fmt::Display for SignatureMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethodKind {
    type Err = SignError;

    fn from_str(s: &str) -> SignResult<Self> {
        match s {
            "PLAINTEXT" => Ok(SignatureMethodKind::Plaintext),
            "HMAC-SHA1" => Ok(SignatureMethodKind::HmacSha1),
            other => Err(SignError::UnsupportedSignatureMethod(other.to_string())),
        }
    }
}

/// Endpoints and signing options of an OAuth session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    pub request_token_url: String,
    pub access_token_url: String,
    pub authorize_url: String,
    pub version: String,
    pub signature_method: SignatureMethodKind,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        OAuthConfig {
            request_token_url: DEFAULT_REQUEST_TOKEN_URL.to_string(),
            access_token_url: DEFAULT_ACCESS_TOKEN_URL.to_string(),
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            version: OAUTH_VERSION.to_string(),
            signature_method: SignatureMethodKind::Plaintext,
        }
    }
}

impl OAuthConfig {
    /// Return a copy with `overrides` applied, leaving `self` untouched on error.
    pub fn with_overrides(&self, overrides: ConfigOverrides) -> SignResult<Self> {
        let mut config = self.clone();
        overrides.apply(&mut config)?;
        Ok(config)
    }
}

/// Partial [`OAuthConfig`]; `Some` fields replace, `None` fields keep.
///
/// Useful for pointing a session at a proxy (CORS, test servers) or switching
/// to `HMAC-SHA1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub request_token_url: Option<String>,
    pub access_token_url: Option<String>,
    pub authorize_url: Option<String>,
    pub version: Option<String>,
    pub signature_method: Option<SignatureMethodKind>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn request_token_url<T: Into<String>>(self, url: T) -> Self {
        ConfigOverrides {
            request_token_url: Some(url.into()),
            ..self
        }
    }

    pub fn access_token_url<T: Into<String>>(self, url: T) -> Self {
        ConfigOverrides {
            access_token_url: Some(url.into()),
            ..self
        }
    }

    pub fn authorize_url<T: Into<String>>(self, url: T) -> Self {
        ConfigOverrides {
            authorize_url: Some(url.into()),
            ..self
        }
    }

    pub fn version<T: Into<String>>(self, version: T) -> Self {
        ConfigOverrides {
            version: Some(version.into()),
            ..self
        }
    }

    pub fn signature_method(self, signature_method: SignatureMethodKind) -> Self {
        ConfigOverrides {
            signature_method: Some(signature_method),
            ..self
        }
    }

    /// Write every `Some` field into `config`.
    ///
    /// # Errors
    ///
    /// Fails with [`SignError::InvalidVersion`] for any version but `1.0`;
    /// `config` is not modified in that case.
    pub fn apply(self, config: &mut OAuthConfig) -> SignResult<()> {
        if let Some(ref version) = self.version {
            if version != OAUTH_VERSION {
                return Err(SignError::InvalidVersion(version.clone()));
            }
        }
        if let Some(url) = self.request_token_url {
            config.request_token_url = url;
        }
        if let Some(url) = self.access_token_url {
            config.access_token_url = url;
        }
        if let Some(url) = self.authorize_url {
            config.authorize_url = url;
        }
        if let Some(version) = self.version {
            config.version = version;
        }
        if let Some(signature_method) = self.signature_method {
            config.signature_method = signature_method;
        }
        Ok(())
    }
}
