use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use failure::err_msg;
use ring::{digest, hmac};

pub struct RingCryptographer;

struct RingHmacKey(hmac::Key);

impl HmacKey for RingHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag = hmac::sign(&self.0, data);
        Ok(tag.as_ref().to_vec())
    }
}

// This is always `Some` until `finish` is called.
struct RingHasher(Option<digest::Context>);

impl Hasher for RingHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        match self.0.as_mut() {
            Some(ctx) => {
                ctx.update(data);
                Ok(())
            }
            None => Err(CryptoError::Other(err_msg("update called after `finish`"))),
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        let ctx = self
            .0
            .take()
            .ok_or_else(|| CryptoError::Other(err_msg("`finish` called twice")))?;
        Ok(ctx.finish().as_ref().to_owned())
    }
}

impl Cryptographer for RingCryptographer {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        let k = hmac::Key::new(hmac::HMAC_SHA256, key);
        Ok(Box::new(RingHmacKey(k)))
    }

    fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError> {
        let ctx = digest::Context::new(&digest::SHA256);
        Ok(Box::new(RingHasher(Some(ctx))))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hasher_finish_twice() {
        let mut hasher = RingCryptographer.new_hasher().unwrap();
        hasher.update(b"payload").unwrap();
        assert_eq!(hasher.finish().unwrap().len(), 32);
        assert!(hasher.finish().is_err());
        assert!(hasher.update(b"more").is_err());
    }

    #[test]
    fn hmac_output_length() {
        let key = RingCryptographer.new_key(b"secret").unwrap();
        assert_eq!(key.sign(b"message").unwrap().len(), 32);
    }
}
