use thiserror::Error;

use crate::AuthLevel;

pub type Result<T> = std::result::Result<T, Error>;
pub type SignResult<T> = std::result::Result<T, SignError>;
pub type TokenReaderResult<T> = std::result::Result<T, TokenReaderError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("token acquisition failed : {0}")]
    TokenReader(#[from] TokenReaderError),
    #[error("OAuth sign failed : {0}")]
    Signer(#[from] SignError),
    #[error("precondition failed : {0}")]
    Precondition(#[from] PreconditionError),
    #[error("request failed : {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("transport failed : {0}")]
    Transport(String),
    #[error("server responded {status} : {message}")]
    Http { status: u16, message: String },
    #[error("query serialization failed : {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP collaborator failed or the server answered with an error status.
    Transport,
    /// The server answered, but the body could not be understood.
    Parse,
    /// The call was made in a state that does not allow it.
    Precondition,
    /// The request could not be signed.
    Sign,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TokenReader(_) => ErrorKind::Parse,
            Error::Signer(_) | Error::Query(_) => ErrorKind::Sign,
            Error::Precondition(_) => ErrorKind::Precondition,
            Error::Reqwest(_) | Error::Transport(_) | Error::Http { .. } => ErrorKind::Transport,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error("unsupported signature method : {0}")]
    UnsupportedSignatureMethod(String),
    #[error("invalid oauth_version, must be 1.0, but specified {0}.")]
    InvalidVersion(String),
    #[error("invalid url {0} : {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("invalid http method : {0}")]
    InvalidMethod(String),
    #[error("{0} is a protocol parameter and cannot be passed in the query")]
    ReservedParameter(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenReaderError {
    #[error("response has malformed format: not found {0} in {1}")]
    TokenKeyNotFound(&'static str, String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),
    #[error("consumer key and secret are required")]
    MissingConsumerCredentials,
    #[error("no request token, call request_token first")]
    MissingRequestToken,
    #[error("session already holds an access token")]
    AlreadyAuthorized,
    #[error("You must authenticate to access this resource. (required level {required}, current level {current})")]
    InsufficientLevel {
        required: AuthLevel,
        current: AuthLevel,
    },
}
