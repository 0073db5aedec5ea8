use crate::canonical::canonical_string;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::*;
use crate::header::SignedHeaders;
use crate::payload::PayloadHasher;
use crate::request::SignableRequest;
use crate::signature::Signature;

/// RequestSigner computes Etvas signatures for a fixed set of credentials.
///
/// Signing is a pure function of the request and the credentials: the same inputs always give
/// the same signature.  Signers hold no mutable state, so any number of them, with different
/// credentials, may be used concurrently.
#[derive(Debug)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        RequestSigner { credentials }
    }

    /// Build a signer from the credentials in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(RequestSigner::new(config.credentials()?))
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Lowercase hex SHA-256 of a body.  `None` hashes the same as the empty string.
    pub fn compute_hash(body: Option<&str>) -> Result<String> {
        PayloadHasher::hash(body)
    }

    /// The exact string that is signed for `request`.
    pub fn canonical_string(&self, request: &SignableRequest<'_>) -> Result<String> {
        let hash = RequestSigner::compute_hash(request.body())?;
        Ok(canonical_string(self.api_key(), request, &hash))
    }

    /// Compute the HMAC-SHA256 signature of `request`.
    pub fn compute_signature(&self, request: &SignableRequest<'_>) -> Result<Signature> {
        let canonical = self.canonical_string(request)?;
        let mac = self.credentials.key().sign(canonical.as_bytes())?;
        Ok(Signature::new(mac))
    }

    /// Sign `request` and assemble the headers that authenticate it.
    pub fn sign(&self, request: &SignableRequest<'_>) -> Result<SignedHeaders> {
        let signature = self.compute_signature(request)?;
        log::debug!(
            "signed {} {} at {}",
            request.method(),
            request.path(),
            request.timestamp()
        );
        Ok(SignedHeaders {
            api_key: self.api_key().to_string(),
            timestamp: request.timestamp(),
            signature,
            content_type: request.content_type().map(str::to_string),
            context: request.context().map(str::to_string),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::RequestBuilder;

    fn signer() -> RequestSigner {
        RequestSigner::new(
            Credentials::new(
                "gESWLML3LD3WRcz821a7H1FU8aqVWmwj4oS8gLD3",
                "FTi75OKANdqXltBIbllry9fDKkdmL8fy",
            )
            .unwrap(),
        )
    }

    fn greet() -> RequestBuilder<'static> {
        RequestBuilder::new("GET", "/greet")
            .context(Some("06c1e9ee-ee91-493a-866e-d210b22d96c8"))
            .timestamp(1598014728)
    }

    #[test]
    fn test_known_signature() {
        let sig = signer().compute_signature(&greet().request()).unwrap();
        assert_eq!(
            sig.to_hex(),
            "d8c657ce2464faa4bcc6494a4323850b0f0af86f33244e91f1978e3f71a93b02"
        );
    }

    #[test]
    fn test_method_case_insensitive() {
        let s = signer();
        let upper = s.compute_signature(&greet().request()).unwrap();
        let lower = RequestBuilder::new("get", "/greet")
            .context(Some("06c1e9ee-ee91-493a-866e-d210b22d96c8"))
            .timestamp(1598014728)
            .request();
        assert_eq!(s.compute_signature(&lower).unwrap(), upper);
    }

    #[test]
    fn test_deterministic() {
        let s = signer();
        let a = s.compute_signature(&greet().request()).unwrap();
        let b = s.compute_signature(&greet().request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_headers() {
        let headers = signer()
            .sign(&greet().content_type(Some("text/plain")).request())
            .unwrap();
        assert_eq!(headers.api_key, "gESWLML3LD3WRcz821a7H1FU8aqVWmwj4oS8gLD3");
        assert_eq!(headers.timestamp, 1598014728);
        assert_eq!(headers.content_type, Some("text/plain".to_string()));
        assert_eq!(
            headers.context,
            Some("06c1e9ee-ee91-493a-866e-d210b22d96c8".to_string())
        );
    }

    #[test]
    fn test_api_key_line_from_credentials() {
        let s = signer();
        assert_eq!(s.api_key(), "gESWLML3LD3WRcz821a7H1FU8aqVWmwj4oS8gLD3");
        let canonical = s.canonical_string(&greet().request()).unwrap();
        assert!(canonical
            .lines()
            .any(|l| l == "x-api-key:gESWLML3LD3WRcz821a7H1FU8aqVWmwj4oS8gLD3"));
    }

    #[test]
    fn test_sign_headers_minimal() {
        let req = RequestBuilder::new("GET", "/greet").timestamp(1).request();
        let headers = signer().sign(&req).unwrap();
        assert_eq!(headers.content_type, None);
        assert_eq!(headers.context, None);
        assert_eq!(headers.pairs().len(), 3);
    }
}
