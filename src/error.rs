use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    /// A required credential was absent or empty.
    #[fail(display = "Missing credential: {} is not set", _0)]
    MissingCredential(&'static str),

    #[fail(display = "Configuration error: {}", _0)]
    Config(String),

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(display = "Invalid HTTP method: {}", _0)]
    InvalidMethod(String),

    #[fail(display = "Invalid header value for {}", _0)]
    InvalidHeader(String),

    #[fail(display = "Invalid signature: {}", _0)]
    InvalidSignature(String),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),

    #[fail(display = "HTTP error: {}", _0)]
    Http(#[fail(cause)] reqwest::Error),
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl From<envconfig::Error> for Error {
    fn from(e: envconfig::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidSignature(e.to_string())
    }
}
