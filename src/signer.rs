use std::borrow::Cow;

use http::Method;
use oauth1_request::signature_method::{HmacSha1, Plaintext, SignatureMethod};
use oauth1_request::signer::Signer as OAuthSigner;
use oauth1_request::Options;
use url::Url;

use crate::{SecretsProvider, SignError, SignResult, SignatureMethodKind};

const OAUTH_IDENTIFIER: &str = "oauth_";
const REALM_IDENTIFIER: &str = "realm";

/// Produces `Authorization` header values for a set of secrets.
#[derive(Debug, Clone)]
pub struct Signer<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    secrets: &'a TSecretsProvider,
    parameters: OAuthParameters<'a>,
}

impl<'a, TSecretsProvider> Signer<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    pub fn new(secrets: &'a TSecretsProvider, parameters: OAuthParameters<'a>) -> Self {
        Signer {
            secrets,
            parameters,
        }
    }

    /// Sign a request to `url` and return the header value (`OAuth oauth_...`).
    ///
    /// Query parameters of `url` take part in the signature base string.
    /// Protocol parameters (`oauth_*`) belong in the header only, so a query
    /// carrying one is rejected.
    pub fn generate_signature(self, method: &Method, url: &Url) -> SignResult<String> {
        let mut query: Vec<(Cow<str>, Cow<str>)> = Vec::new();
        for (key, value) in url.query_pairs() {
            if key.starts_with(OAUTH_IDENTIFIER) {
                return Err(SignError::ReservedParameter(key.into_owned()));
            }
            query.push((key, value));
        }
        query.sort();

        let mut pure_url = url.clone();
        pure_url.set_query(None);
        pure_url.set_fragment(None);

        let parameters = self.parameters;
        let sign = match parameters.signature_method {
            SignatureMethodKind::HmacSha1 => {
                sign_with(HmacSha1, self.secrets, &parameters, method, pure_url, &query)
            }
            SignatureMethodKind::Plaintext => {
                sign_with(Plaintext, self.secrets, &parameters, method, pure_url, &query)
            }
        };

        if let Some(ref realm) = parameters.realm {
            // OAuth oauth_...,realm="realm"
            Ok(format!("{},{}=\"{}\"", sign, REALM_IDENTIFIER, realm.as_ref()))
        } else {
            // OAuth oauth_...
            Ok(sign)
        }
    }
}

fn sign_with<TSecretsProvider, TSignatureMethod>(
    signature_method: TSignatureMethod,
    secrets: &TSecretsProvider,
    parameters: &OAuthParameters<'_>,
    method: &Method,
    url: Url,
    sorted_query: &[(Cow<str>, Cow<str>)],
) -> String
where
    TSecretsProvider: SecretsProvider,
    TSignatureMethod: SignatureMethod,
{
    let (consumer_key, consumer_secret) = secrets.get_consumer_key_pair();
    let (token, token_secret) = secrets.get_token_option_pair();
    let options = parameters.build_options(token);

    // oauth1-request wants every parameter in ascending order, with the
    // oauth_* block inserted where "oauth_" would sort.
    let split = sorted_query.partition_point(|(key, _)| &**key < OAUTH_IDENTIFIER);
    let (query_before_oauth, query_after_oauth) = sorted_query.split_at(split);

    let mut signer = OAuthSigner::with_signature_method(
        signature_method,
        method.as_str(),
        url,
        consumer_secret,
        token_secret,
    );
    for (key, value) in query_before_oauth {
        signer.parameter(key, value);
    }
    let mut signer = signer.oauth_parameters(consumer_key, &options);
    for (key, value) in query_after_oauth {
        signer.parameter(key, value);
    }
    signer.finish().authorization
}

/// OAuth protocol parameters of a single signed request.
///
/// Nonce and timestamp are generated when left unset; set them only to get
/// reproducible signatures.
#[derive(Debug, Clone)]
pub struct OAuthParameters<'a> {
    callback: Option<Cow<'a, str>>,
    nonce: Option<Cow<'a, str>>,
    realm: Option<Cow<'a, str>>,
    signature_method: SignatureMethodKind,
    timestamp: Option<u64>,
    verifier: Option<Cow<'a, str>>,
    version: bool,
}

impl Default for OAuthParameters<'static> {
    fn default() -> Self {
        OAuthParameters {
            callback: None,
            nonce: None,
            realm: None,
            signature_method: SignatureMethodKind::HmacSha1,
            timestamp: None,
            verifier: None,
            version: false,
        }
    }
}

impl OAuthParameters<'static> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<'a> OAuthParameters<'a> {
    pub fn callback<T>(self, callback: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            callback: Some(callback.into()),
            ..self
        }
    }

    /// set the oauth_nonce value
    pub fn nonce<T>(self, nonce: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            nonce: Some(nonce.into()),
            ..self
        }
    }

    /// set the oauth_realm value
    pub fn realm<T>(self, realm: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            realm: Some(realm.into()),
            ..self
        }
    }

    pub fn signature_method(self, signature_method: SignatureMethodKind) -> Self {
        OAuthParameters {
            signature_method,
            ..self
        }
    }

    /// set the oauth_timestamp value
    pub fn timestamp<T>(self, timestamp: T) -> Self
    where
        T: Into<u64>,
    {
        OAuthParameters {
            timestamp: Some(timestamp.into()),
            ..self
        }
    }

    /// set the oauth_verifier value
    pub fn verifier<T>(self, verifier: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            verifier: Some(verifier.into()),
            ..self
        }
    }

    /// set the oauth_version value (boolean)
    ///
    /// # Note
    /// When the version has value `true`, oauth_version will be set with "1.0".
    /// Otherwise, oauth_version will not be included in your request.
    pub fn version<T>(self, version: T) -> Self
    where
        T: Into<bool>,
    {
        OAuthParameters {
            version: version.into(),
            ..self
        }
    }

    fn build_options<'b>(&'b self, token: Option<&'b str>) -> Options<'b> {
        let mut opt = Options::new();

        // NOTE: items must be added by alphabetical order

        if let Some(ref callback) = self.callback {
            opt.callback(callback.as_ref());
        }
        if let Some(ref nonce) = self.nonce {
            opt.nonce(nonce.as_ref());
        }
        if let Some(timestamp) = self.timestamp {
            opt.timestamp(timestamp);
        }
        if let Some(token) = token {
            opt.token(token);
        }
        if let Some(ref verifier) = self.verifier {
            opt.verifier(verifier.as_ref());
        }
        opt.version(self.version);

        opt
    }
}
