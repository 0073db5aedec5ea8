use crate::error::*;
use crate::signature::Signature;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub const X_API_KEY: &str = "x-api-key";
pub const X_TIMESTAMP: &str = "x-timestamp";
pub const X_SIGNATURE: &str = "x-signature";
pub const X_ETVAS_CONTEXT: &str = "x-etvas-context";
pub const CONTENT_TYPE: &str = "content-type";

/// The authentication headers for a signed request.
///
/// `x-api-key`, `x-timestamp` and `x-signature` are always present; `content-type` and
/// `x-etvas-context` only when the request carried them.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedHeaders {
    pub api_key: String,
    pub timestamp: u64,
    pub signature: Signature,
    pub content_type: Option<String>,
    pub context: Option<String>,
}

impl SignedHeaders {
    /// The headers as (name, value) pairs.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (X_API_KEY, self.api_key.clone()),
            (X_TIMESTAMP, self.timestamp.to_string()),
            (X_SIGNATURE, self.signature.to_hex()),
        ];
        if let Some(ref content_type) = self.content_type {
            pairs.push((CONTENT_TYPE, content_type.clone()));
        }
        if let Some(ref context) = self.context {
            pairs.push((X_ETVAS_CONTEXT, context.clone()));
        }
        pairs
    }

    /// Look up a header value by (lower-case) name.
    pub fn get(&self, name: &str) -> Option<String> {
        self.pairs()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Convert to a `HeaderMap`, failing if a value is not a legal header value (for
    /// example, a context containing a newline).
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (name, value) in self.pairs() {
            let value = HeaderValue::from_str(&value)
                .map_err(|_| Error::InvalidHeader(name.to_string()))?;
            map.insert(HeaderName::from_static(name), value);
        }
        Ok(map)
    }
}
