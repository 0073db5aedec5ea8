//! `etvas-sign` performs its cryptography through a pluggable backend.
//!
//! By default the `ring` crate is used (feature `use_ring`).  Enabling `use_openssl` instead
//! selects an OpenSSL implementation; with both enabled, ring is installed automatically and
//! `OpensslCryptographer` can be installed explicitly instead.  Applications with other
//! requirements can implement [`Cryptographer`] themselves and install it with
//! [`set_cryptographer`] before signing any request.
use failure::{Error, Fail};

mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;
#[cfg(feature = "use_ring")]
pub use self::ring::RingCryptographer;

#[cfg(feature = "use_openssl")]
mod openssl;
#[cfg(feature = "use_openssl")]
pub use self::openssl::OpensslCryptographer;

#[derive(Fail, Debug)]
pub enum CryptoError {
    /// No backend has been installed and none is enabled by a crate feature.
    #[fail(display = "No cryptographer has been installed")]
    Uninitialized,

    /// The backend failed in some way it could not describe more precisely.
    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] Error),
}

/// A keyed HMAC-SHA256 signer.
pub trait HmacKey: Send + Sync + 'static {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// An incremental SHA-256 hasher.  `finish` may only be called once.
pub trait Hasher: Send + 'static {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;
    fn finish(&mut self) -> Result<Vec<u8>, CryptoError>;
}

pub trait Cryptographer: Send + Sync + 'static {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;
    fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError>;
}
