//! Construction of the canonical string, the message over which the HMAC is computed.
//!
//! The attribute order here is the wire contract with the Etvas API; the server rebuilds the
//! same string, so any change to it invalidates every signature.
use crate::request::SignableRequest;
use std::borrow::Cow;

const EOL: &str = "\n";

/// Build the canonical string for `request`, given the API key and the hex hash of the body.
///
/// Lines, in order: upper-cased method, path, query (if any), `content-type:` (if any),
/// `x-api-key:`, `x-etvas-context:` (if any), `x-timestamp:`, body hash.  There is no
/// trailing newline.
pub(crate) fn canonical_string(api_key: &str, request: &SignableRequest<'_>, hash: &str) -> String {
    let mut lines: Vec<Cow<'_, str>> = Vec::with_capacity(8);

    lines.push(Cow::Owned(request.method().to_ascii_uppercase()));
    lines.push(Cow::Borrowed(request.path()));
    if let Some(query) = request.query() {
        lines.push(Cow::Borrowed(query));
    }
    if let Some(content_type) = request.content_type() {
        lines.push(Cow::Owned(format!("content-type:{}", content_type)));
    }
    lines.push(Cow::Owned(format!("x-api-key:{}", api_key)));
    if let Some(context) = request.context() {
        lines.push(Cow::Owned(format!("x-etvas-context:{}", context)));
    }
    lines.push(Cow::Owned(format!("x-timestamp:{}", request.timestamp())));
    lines.push(Cow::Borrowed(hash));

    log::trace!("canonical string has {} lines", lines.len());
    lines.join(EOL)
}
