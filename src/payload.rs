use crate::crypto::{self, Hasher};
use crate::error::*;

/// A utility for hashing payloads. Feed your canonical body to this, then use the hex
/// result of `finish` as the last line of the canonical string.
///
/// Unlike the hash in many signing schemes, no content-type or prefix is mixed in: the hash
/// is the plain SHA-256 of the body bytes.
pub struct PayloadHasher {
    hasher: Box<dyn Hasher>,
}

impl PayloadHasher {
    /// Create a new, empty PayloadHasher.
    pub fn new() -> Result<Self> {
        Ok(PayloadHasher {
            hasher: crypto::get_cryptographer()?.new_hasher()?,
        })
    }

    /// Hash a single value and return it as lowercase hex.  An absent payload hashes the
    /// same as an empty one.
    pub fn hash<B>(payload: Option<B>) -> Result<String>
    where
        B: AsRef<[u8]>,
    {
        let mut hasher = PayloadHasher::new()?;
        if let Some(payload) = payload {
            hasher.update(payload)?;
        }
        hasher.finish()
    }

    /// Update the hash with new data.
    pub fn update<B>(&mut self, data: B) -> Result<()>
    where
        B: AsRef<[u8]>,
    {
        Ok(self.hasher.update(data.as_ref())?)
    }

    /// Finish hashing and return the result as lowercase hex.
    pub fn finish(mut self) -> Result<String> {
        Ok(hex::encode(self.hasher.finish()?))
    }
}

#[cfg(test)]
mod test {
    use super::PayloadHasher;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn hash_consistency() {
        let mut hasher1 = PayloadHasher::new().unwrap();
        hasher1.update("pay").unwrap();
        hasher1.update("load").unwrap();
        let hash1 = hasher1.finish().unwrap();

        let mut hasher2 = PayloadHasher::new().unwrap();
        hasher2.update("payload").unwrap();
        let hash2 = hasher2.finish().unwrap();

        let hash3 = PayloadHasher::hash(Some("payload")).unwrap();

        assert_eq!(
            hash1,
            "239f59ed55e737c77147cf55ad0c1b030b6d7ee748a7426952f9b852d5a935e5"
        );
        assert_eq!(hash2, hash1);
        assert_eq!(hash3, hash1);
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(PayloadHasher::hash(None::<&str>).unwrap(), EMPTY_SHA256);
        assert_eq!(PayloadHasher::hash(Some("")).unwrap(), EMPTY_SHA256);
    }

    #[test]
    fn known_body() {
        assert_eq!(
            PayloadHasher::hash(Some("asfsafsdf asdfasdf sdfsafdsg")).unwrap(),
            "5bea3dde630cd7d8c23c03309aca75ee70c017d1a8635359902dbf9c6820f242"
        );
    }
}
