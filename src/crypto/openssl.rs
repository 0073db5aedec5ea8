use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use failure::err_msg;
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;

impl From<ErrorStack> for CryptoError {
    fn from(e: ErrorStack) -> Self {
        CryptoError::Other(e.into())
    }
}

pub struct OpensslCryptographer;

struct OpensslHmacKey(PKey<Private>);

impl HmacKey for OpensslHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut signer = Signer::new(MessageDigest::sha256(), &self.0)?;
        signer.update(data)?;
        Ok(signer.sign_to_vec()?)
    }
}

// This is always `Some` until `finish` is called.
struct OpensslHasher(Option<openssl::hash::Hasher>);

impl Hasher for OpensslHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        let hasher = self
            .0
            .as_mut()
            .ok_or_else(|| CryptoError::Other(err_msg("update called after `finish`")))?;
        hasher.update(data)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        let mut hasher = self
            .0
            .take()
            .ok_or_else(|| CryptoError::Other(err_msg("`finish` called twice")))?;
        Ok(hasher.finish()?.to_vec())
    }
}

impl Cryptographer for OpensslCryptographer {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        Ok(Box::new(OpensslHmacKey(PKey::hmac(key)?)))
    }

    fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError> {
        let hasher = openssl::hash::Hasher::new(MessageDigest::sha256())?;
        Ok(Box::new(OpensslHasher(Some(hasher))))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hasher_finish_twice() {
        let mut hasher = OpensslCryptographer.new_hasher().unwrap();
        hasher.update(b"payload").unwrap();
        assert_eq!(
            hex::encode(hasher.finish().unwrap()),
            "239f59ed55e737c77147cf55ad0c1b030b6d7ee748a7426952f9b852d5a935e5"
        );
        assert!(hasher.finish().is_err());
        assert!(hasher.update(b"more").is_err());
    }

    #[test]
    fn hmac_output_length() {
        let key = OpensslCryptographer.new_key(b"secret").unwrap();
        assert_eq!(key.sign(b"message").unwrap().len(), 32);
    }

    #[test]
    fn hmac_known_signature() {
        let key = OpensslCryptographer
            .new_key(b"FTi75OKANdqXltBIbllry9fDKkdmL8fy")
            .unwrap();
        let message = "GET\n\
                       /greet\n\
                       x-api-key:gESWLML3LD3WRcz821a7H1FU8aqVWmwj4oS8gLD3\n\
                       x-etvas-context:06c1e9ee-ee91-493a-866e-d210b22d96c8\n\
                       x-timestamp:1598014728\n\
                       e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(
            hex::encode(key.sign(message.as_bytes()).unwrap()),
            "d8c657ce2464faa4bcc6494a4323850b0f0af86f33244e91f1978e3f71a93b02"
        );
    }
}
