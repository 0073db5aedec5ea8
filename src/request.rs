use std::time::{SystemTime, UNIX_EPOCH};

/// The current time in whole seconds since the Unix epoch, as sent in `x-timestamp`.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

// Optional attributes are omitted when absent *or* empty; both cases sign identically.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// SignableRequest represents a single HTTP request to the Etvas API, as far as signing is
/// concerned.
///
/// The structure is created using the builder idiom (see `RequestBuilder`), and is used both to
/// compute a signature and, by the `Dispatcher`, to issue the request itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SignableRequest<'a> {
    method: &'a str,
    path: &'a str,
    query: Option<&'a str>,
    content_type: Option<&'a str>,
    context: Option<&'a str>,
    body: Option<&'a str>,
    timestamp: u64,
}

impl<'a> SignableRequest<'a> {
    /// The method as given to the builder.  It is upper-cased when signing.
    pub fn method(&self) -> &'a str {
        self.method
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    pub fn content_type(&self) -> Option<&'a str> {
        self.content_type
    }

    pub fn context(&self) -> Option<&'a str> {
        self.context
    }

    /// The canonical body: the exact bytes that are hashed and sent.
    pub fn body(&self) -> Option<&'a str> {
        self.body
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The path with `?query` appended when a query is present.
    pub fn path_and_query(&self) -> String {
        match self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.to_string(),
        }
    }
}

/// Builder for SignableRequest instances.
///
/// The timestamp defaults to the current time.  Most uses will hold several fields (such as the
/// context) fixed; cloning a builder with those fields applied avoids repeating them.
///
/// # Examples
///
/// ```
/// use etvas_sign::RequestBuilder;
/// let base = RequestBuilder::new("GET", "/greet").context(Some("06c1e9ee"));
/// let request1 = base.clone().query(Some("foo=bar")).request();
/// let request2 = base.clone().timestamp(1598014728).request();
/// assert_eq!(request1.path_and_query(), "/greet?foo=bar");
/// assert_eq!(request2.timestamp(), 1598014728);
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a>(SignableRequest<'a>);

impl<'a> RequestBuilder<'a> {
    /// Create a new request with the given method and path.
    pub fn new(method: &'a str, path: &'a str) -> Self {
        RequestBuilder(SignableRequest {
            method,
            path,
            query: None,
            content_type: None,
            context: None,
            body: None,
            timestamp: current_timestamp(),
        })
    }

    /// Set the query string, without the leading `?`.
    pub fn query(mut self, query: Option<&'a str>) -> Self {
        self.0.query = present(query);
        self
    }

    /// Set the content type; it is both signed and sent as the `content-type` header.
    pub fn content_type(mut self, content_type: Option<&'a str>) -> Self {
        self.0.content_type = present(content_type);
        self
    }

    /// Set the `x-etvas-context` correlation id.
    pub fn context(mut self, context: Option<&'a str>) -> Self {
        self.0.context = present(context);
        self
    }

    /// Set the canonical body.  This must be exactly the bytes that will be sent.
    pub fn body(mut self, body: Option<&'a str>) -> Self {
        self.0.body = body;
        self
    }

    /// Override the timestamp, in seconds since the Unix epoch.
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.0.timestamp = timestamp;
        self
    }

    /// Get the request from this builder
    pub fn request(self) -> SignableRequest<'a> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let before = current_timestamp();
        let req = RequestBuilder::new("get", "/users").request();
        assert_eq!(req.method(), "get");
        assert_eq!(req.path(), "/users");
        assert_eq!(req.query(), None);
        assert_eq!(req.content_type(), None);
        assert_eq!(req.context(), None);
        assert_eq!(req.body(), None);
        assert!(req.timestamp() >= before);
    }

    #[test]
    fn test_empty_optionals_are_absent() {
        let req = RequestBuilder::new("GET", "/users")
            .query(Some(""))
            .content_type(Some(""))
            .context(Some(""))
            .request();
        assert_eq!(req.query(), None);
        assert_eq!(req.content_type(), None);
        assert_eq!(req.context(), None);
    }

    #[test]
    fn test_empty_body_kept() {
        let req = RequestBuilder::new("POST", "/users").body(Some("")).request();
        assert_eq!(req.body(), Some(""));
    }

    #[test]
    fn test_path_and_query() {
        let req = RequestBuilder::new("GET", "/greet").request();
        assert_eq!(req.path_and_query(), "/greet");
        let req = RequestBuilder::new("GET", "/greet")
            .query(Some("foo=bar&x=1"))
            .request();
        assert_eq!(req.path_and_query(), "/greet?foo=bar&x=1");
    }
}
