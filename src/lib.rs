/*!
discogs-oauth: OAuth 1.0a for the Discogs API, on top of [reqwest](https://crates.io/crates/reqwest)
and [oauth1-request](https://crates.io/crates/oauth1-request).

# Overview

This library runs the three-step OAuth 1.0a handshake against Discogs
(request token, user authorization, access token), keeps the resulting
session state, and produces `Authorization` header values for any
subsequent API call. Both `PLAINTEXT` (the Discogs default) and
`HMAC-SHA1` signatures are supported.

# How to use

## Acquiring an access token

```rust,no_run
# async fn run() -> discogs_oauth::Result<()> {
use std::io;
use discogs_oauth::{DiscogsOAuth, HttpTransport};

let transport = HttpTransport::new().user_agent("MyDiscogsApp/1.0 +https://example.com");
let mut oauth = DiscogsOAuth::new(transport, None);

// step 1: acquire request token & token secret
let auth = oauth
    .request_token("[CONSUMER_KEY]", "[CONSUMER_SECRET]", "oob")
    .await?;

// step 2. send the user to the authorize page
println!("please access to: {}", auth.authorize_url.as_deref().unwrap_or_default());

println!("input verifier: ");
let mut user_input = String::new();
io::stdin().read_line(&mut user_input).expect("stdin");
let verifier = user_input.trim();

// step 3. acquire access token
let auth = oauth.access_token(verifier).await?;
println!("token: {:?}", auth.token);
# Ok(())
# }
```

## Signing API calls

```rust,no_run
# fn run(oauth: &discogs_oauth::DiscogsOAuth) -> discogs_oauth::Result<()> {
use discogs_oauth::{wantlist, DISCOGS_API_URL};

// a raw method + url pair
let header = oauth.to_header("GET", "https://api.discogs.com/oauth/identity")?;

// or a typed endpoint, checked against the session's authorization level
let endpoint = wantlist::add_release("rodneyfool", 130076, None)?;
let signed = oauth.sign_endpoint(DISCOGS_API_URL, &endpoint)?;
# Ok(())
# }
```

## Persisting a session

The state returned by [`DiscogsOAuth::export_auth`] serializes with serde and
can be handed back to [`DiscogsOAuth::new`] as an [`Auth::OAuth`] descriptor.
*/
mod auth;
mod config;
pub mod encode;
mod endpoint;
mod error;
mod oauth;
mod secrets;
mod signer;
mod token_reader;
mod transport;
pub mod user;
pub mod wantlist;

// exposed to external program
pub use auth::{Auth, AuthLevel, DiscogsAuth, OAuthAuth};
pub use config::{
    ConfigOverrides, OAuthConfig, SignatureMethodKind, DEFAULT_ACCESS_TOKEN_URL,
    DEFAULT_AUTHORIZE_URL, DEFAULT_REQUEST_TOKEN_URL, OAUTH_VERSION,
};
pub use endpoint::{Endpoint, Pagination, SortOrder};
pub use error::{
    Error, ErrorKind, PreconditionError, Result, SignError, SignResult, TokenReaderError,
    TokenReaderResult,
};
pub use oauth::{DiscogsOAuth, SignedRequest};
pub use secrets::{Secrets, SecretsProvider};
pub use signer::{OAuthParameters, Signer};
pub use token_reader::{read_oauth_token, TokenResponse};
pub use transport::{HttpTransport, Transport, TransportRequest, DEFAULT_USER_AGENT};

/// Base url of the Discogs REST API.
pub const DISCOGS_API_URL: &str = "https://api.discogs.com";

// exposed constant variables
/// Represents `oauth_callback`.
pub const OAUTH_CALLBACK_KEY: &str = "oauth_callback";
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_verifier`.
pub const OAUTH_VERIFIER_KEY: &str = "oauth_verifier";
