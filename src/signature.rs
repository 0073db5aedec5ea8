use crate::error::*;
use std::fmt;
use std::str::FromStr;

/// Length in bytes of an HMAC-SHA256 output.
pub const SIGNATURE_LEN: usize = 32;

/// The HMAC-SHA256 of a canonical string.  It is carried in the `x-signature` header as
/// lowercase hex, which is also its `Display` form.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub(crate) fn new(mac: Vec<u8>) -> Self {
        Signature(mac)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = Error;

    /// Parse a hex signature, as found in an `x-signature` header.  Upper-case hex is
    /// accepted; the length must be that of an HMAC-SHA256 output.
    fn from_str(s: &str) -> Result<Signature> {
        let bytes = hex::decode(s)?;
        if bytes.len() != SIGNATURE_LEN {
            return Err(Error::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            )));
        }
        Ok(Signature(bytes))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HEX: &str = "d8c657ce2464faa4bcc6494a4323850b0f0af86f33244e91f1978e3f71a93b02";

    #[test]
    fn parse_and_display() {
        let sig: Signature = HEX.parse().unwrap();
        assert_eq!(sig.as_bytes().len(), SIGNATURE_LEN);
        assert_eq!(sig.to_string(), HEX);
        assert_eq!(format!("{:?}", sig), format!("Signature({})", HEX));
    }

    #[test]
    fn parse_uppercase() {
        let sig: Signature = HEX.to_uppercase().parse().unwrap();
        assert_eq!(sig.to_string(), HEX);
    }

    #[test]
    fn parse_bad_hex() {
        assert!(Signature::from_str("not hex at all").is_err());
    }

    #[test]
    fn parse_bad_length() {
        match Signature::from_str("abcd") {
            Err(Error::InvalidSignature(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
