use crate::credentials::Credentials;
use crate::error::*;
use envconfig::Envconfig;
use std::fmt;
use url::Url;

/// Connection settings for the Etvas API.
///
/// A `Config` is normally read from the environment with [`Config::from_env`], but may be built
/// directly; nothing in the signing path reads the environment itself.
#[derive(Envconfig, Clone, PartialEq)]
pub struct Config {
    #[envconfig(from = "ETVAS_API_KEY")]
    pub api_key: String,
    #[envconfig(from = "ETVAS_SIGN_SECRET")]
    pub sign_secret: String,
    /// Only needed to dispatch requests, not to sign them.
    #[envconfig(from = "ETVAS_API_BASE_URL")]
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn new<S, T>(api_key: S, sign_secret: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Config {
            api_key: api_key.into(),
            sign_secret: sign_secret.into(),
            api_base_url: None,
        }
    }

    /// Set the base URL that request paths are appended to.
    pub fn with_base_url<S: Into<String>>(mut self, api_base_url: S) -> Self {
        self.api_base_url = Some(api_base_url.into());
        self
    }

    /// Read `ETVAS_API_KEY`, `ETVAS_SIGN_SECRET` and `ETVAS_API_BASE_URL` from the process
    /// environment.  Missing or empty credentials are a configuration error.
    pub fn from_env() -> Result<Self> {
        let config = Config::init_from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both credentials are set.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::MissingCredential("ETVAS_API_KEY"));
        }
        if self.sign_secret.is_empty() {
            return Err(Error::MissingCredential("ETVAS_SIGN_SECRET"));
        }
        Ok(())
    }

    pub fn credentials(&self) -> Result<Credentials> {
        self.validate()?;
        Credentials::new(self.api_key.clone(), &self.sign_secret)
    }

    /// The parsed base URL, failing if it is unset or not a valid absolute URL.
    pub fn base_url(&self) -> Result<Url> {
        match self.api_base_url.as_deref().filter(|u| !u.is_empty()) {
            Some(u) => Ok(Url::parse(u)?),
            None => Err(Error::Config("ETVAS_API_BASE_URL is not set".to_string())),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("sign_secret", &"***")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ETVAS_API_KEY: {}", self.api_key)?;
        writeln!(f, "ETVAS_SIGN_SECRET: ***")?;
        writeln!(
            f,
            "ETVAS_API_BASE_URL: {}",
            self.api_base_url.as_deref().unwrap_or("<unset>")
        )
    }
}
