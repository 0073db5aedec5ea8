//! The `etvas-sign` crate signs requests to the Etvas API.
//!
//! Every request carries an `x-api-key`, an `x-timestamp` and an `x-signature` header.  The
//! signature is the lowercase hex HMAC-SHA256, keyed with the account's sign secret, of a
//! *canonical string*: the newline-joined list
//!
//! ```text
//! METHOD
//! /path
//! query                     (only if present)
//! content-type:<type>       (only if present)
//! x-api-key:<api key>
//! x-etvas-context:<context> (only if present)
//! x-timestamp:<seconds>
//! <hex sha256 of the body>
//! ```
//!
//! The server rebuilds the same string, so the order and the presence rules are part of the
//! protocol.  An absent or empty optional value omits its line entirely.
//!
//! # Examples
//!
//! ## Computing a signature
//!
//! ```
//! use etvas_sign::{Credentials, RequestBuilder, RequestSigner};
//!
//! fn main() {
//!     // provide the API key and sign secret
//!     let credentials = Credentials::new(
//!         "gESWLML3LD3WRcz821a7H1FU8aqVWmwj4oS8gLD3",
//!         "FTi75OKANdqXltBIbllry9fDKkdmL8fy",
//!     )
//!     .unwrap();
//!     let signer = RequestSigner::new(credentials);
//!
//!     // provide the details of the request to be signed
//!     let request = RequestBuilder::new("GET", "/greet")
//!         .context(Some("06c1e9ee-ee91-493a-866e-d210b22d96c8"))
//!         .timestamp(1598014728)
//!         .request();
//!
//!     let signature = signer.compute_signature(&request).unwrap();
//!     assert_eq!(
//!         signature.to_string(),
//!         "d8c657ce2464faa4bcc6494a4323850b0f0af86f33244e91f1978e3f71a93b02"
//!     );
//!
//!     // or get all of the headers at once
//!     let headers = signer.sign(&request).unwrap();
//!     assert_eq!(headers.get("x-timestamp"), Some("1598014728".to_string()));
//! }
//! ```
//!
//! ## Sending a request
//!
//! ```no_run
//! use etvas_sign::{Config, Dispatcher, RequestBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), etvas_sign::Error> {
//!     // reads ETVAS_API_KEY, ETVAS_SIGN_SECRET and ETVAS_API_BASE_URL
//!     let config = Config::from_env()?;
//!     let dispatcher = Dispatcher::new(&config)?;
//!
//!     let body = r#"{"firstName":"Jon","lastName":"Appleseed"}"#;
//!     let request = RequestBuilder::new("POST", "/users/test")
//!         .content_type(Some("application/json"))
//!         .context(Some("12345678-1234-4123-1234-0123456789ab"))
//!         .body(Some(body))
//!         .request();
//!
//!     let response = dispatcher.send(&request).await?;
//!     println!("{}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Signing a `reqwest` request
//!
//! ```
//! use etvas_sign::{Credentials, RequestBuilder, RequestSigner, SignRequest};
//!
//! let signer = RequestSigner::new(Credentials::new("api-key", "secret").unwrap());
//! let request = RequestBuilder::new("GET", "/greet").request();
//! let built = reqwest::Client::new()
//!     .get("https://api.example.com/greet")
//!     .sign_etvas(&signer, &request)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert!(built.headers().contains_key("x-signature"));
//! ```
//!
//! # Features
//!
//! `use_ring` (the default) performs the cryptography with `ring`; `use_openssl` uses OpenSSL
//! instead.  See [`crypto`] for supplying another backend.

mod canonical;

mod config;
pub use crate::config::Config;

mod credentials;
pub use crate::credentials::{Credentials, Key};

mod dispatch;
pub use crate::dispatch::Dispatcher;

mod error;
pub use crate::error::*;

mod header;
pub use crate::header::{
    SignedHeaders, CONTENT_TYPE, X_API_KEY, X_ETVAS_CONTEXT, X_SIGNATURE, X_TIMESTAMP,
};

mod payload;
pub use crate::payload::PayloadHasher;

mod request;
pub use crate::request::{current_timestamp, RequestBuilder, SignableRequest};

mod sign;
pub use crate::sign::SignRequest;

mod signature;
pub use crate::signature::{Signature, SIGNATURE_LEN};

mod signer;
pub use crate::signer::RequestSigner;

pub mod crypto;
