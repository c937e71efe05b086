use std::fmt::{Debug, Formatter};

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::{Currency, ValidationError};

pub const DEFAULT_BASE_URL: &str = "https://openexchangerates.org/api";
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

pub const ENV_APP_ID: &str = "OXR_APP_ID";
pub const ENV_BASE_CURRENCY: &str = "OXR_BASE_CURRENCY";
pub const ENV_BASE_URL: &str = "OXR_BASE_URL";

/// Immutable client settings: the application id, the default base currency
/// and where the API lives.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    app_id: String,
    base: Currency,
    base_url: String,
    timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>) -> Result<Self, ValidationError> {
        let app_id = app_id.into().trim().to_owned();
        if app_id.is_empty() {
            return Err(ValidationError::EmptyAppId);
        }

        Ok(Self {
            app_id,
            base: Currency::parse(DEFAULT_BASE_CURRENCY)?,
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    /// Build from `OXR_APP_ID`, `OXR_BASE_CURRENCY` and `OXR_BASE_URL`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup(ENV_APP_ID).ok_or(ValidationError::MissingEnv { name: ENV_APP_ID })?;
        let mut config = Self::new(app_id)?;

        if let Some(base) = lookup(ENV_BASE_CURRENCY).filter(|value| !value.trim().is_empty()) {
            config = config.with_base(Currency::parse(&base)?);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url.trim())?;
        }

        Ok(config)
    }

    pub fn with_base(mut self, base: Currency) -> Self {
        self.base = base;
        self
    }

    /// Point the client at another host. Only absolute `http`/`https` URLs
    /// are accepted; a trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        let invalid = || ValidationError::InvalidBaseUrl {
            value: base_url.clone(),
        };

        let parsed = reqwest::Url::parse(&base_url).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        self.base_url = base_url;
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn base(&self) -> &Currency {
        &self.base
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

// app_id stays out of Debug output so configs can be logged.
impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &"<redacted>")
            .field("base", &self.base)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
