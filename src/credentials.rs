use crate::crypto::{self, HmacKey};
use crate::error::*;
use std::fmt;

/// Signing key, derived from the Etvas sign secret.
///
/// The secret itself is handed to the crypto backend on construction and is not retained here.
pub struct Key(Box<dyn HmacKey>);

impl Key {
    pub fn new<B>(key: B) -> Result<Key>
    where
        B: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::MissingCredential("sign secret"));
        }
        Ok(Key(crypto::get_cryptographer()?.new_key(key)?))
    }

    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.0.sign(data)?)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

/// Etvas credentials: the public API key, sent with every request and included in the
/// canonical string, and the signing key derived from the sign secret.
///
/// Both are checked when the credentials are built and cannot be changed afterwards.
#[derive(Debug)]
pub struct Credentials {
    api_key: String,
    key: Key,
}

impl Credentials {
    /// Build credentials, failing with `Error::MissingCredential` if either value is empty.
    pub fn new<S, B>(api_key: S, sign_secret: B) -> Result<Credentials>
    where
        S: Into<String>,
        B: AsRef<[u8]>,
    {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingCredential("api key"));
        }
        Ok(Credentials {
            api_key,
            key: Key::new(sign_secret)?,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let creds = Credentials::new("my-api-key", "my-secret").unwrap();
        assert_eq!(creds.api_key(), "my-api-key");
        assert_eq!(creds.key().sign(b"data").unwrap().len(), 32);
    }

    #[test]
    fn test_empty_api_key() {
        match Credentials::new("", "my-secret") {
            Err(Error::MissingCredential(what)) => assert_eq!(what, "api key"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_secret() {
        match Credentials::new("my-api-key", "") {
            Err(Error::MissingCredential(what)) => assert_eq!(what, "sign secret"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new("my-api-key", "my-secret").unwrap();
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("my-api-key"));
        assert!(!dbg.contains("my-secret"));
    }
}
