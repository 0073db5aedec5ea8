use crate::config::Config;
use crate::error::*;
use crate::sign::SignRequest;
use crate::{RequestSigner, SignableRequest};
use reqwest::{Client, Method, Response};
use url::Url;

/// Dispatcher signs requests and sends them to the Etvas API.
///
/// It is a thin layer over `reqwest`: responses are returned as-is whatever their status, and
/// there are no retries.  A Dispatcher may be shared between tasks; each call is independent.
#[derive(Debug)]
pub struct Dispatcher {
    client: Client,
    base_url: Url,
    signer: RequestSigner,
}

impl Dispatcher {
    /// Build a dispatcher from a config, which must include a base URL.
    pub fn new(config: &Config) -> Result<Self> {
        let signer = RequestSigner::from_config(config)?;
        Ok(Dispatcher::with_client(
            Client::new(),
            config.base_url()?,
            signer,
        ))
    }

    pub fn with_client(client: Client, base_url: Url, signer: RequestSigner) -> Self {
        Dispatcher {
            client,
            base_url,
            signer,
        }
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// The URL `request` is sent to: the base URL and the path (and `?query`) joined by
    /// exactly one `/`.
    ///
    /// This is a join, not URL resolution, so a base URL such as `https://host/development`
    /// keeps its path prefix, and a path without a leading `/` cannot run into the host.
    pub fn url_for(&self, request: &SignableRequest<'_>) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path_and_query = request.path_and_query();
        Ok(Url::parse(&format!(
            "{}/{}",
            base,
            path_and_query.trim_start_matches('/')
        ))?)
    }

    /// Sign and send `request`.
    pub async fn send(&self, request: &SignableRequest<'_>) -> Result<Response> {
        let method = Method::from_bytes(request.method().to_ascii_uppercase().as_bytes())
            .map_err(|_| Error::InvalidMethod(request.method().to_string()))?;
        let url = self.url_for(request)?;

        let mut builder = self
            .client
            .request(method, url.clone())
            .sign_etvas(&self.signer, request)?;
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        log::debug!("dispatching {} {}", request.method(), url);
        let response = builder.send().await?;
        log::debug!("{} {} returned {}", request.method(), url, response.status());
        Ok(response)
    }
}
