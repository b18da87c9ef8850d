use std::env;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL: {raw}")]
    InvalidBaseUrl { raw: String },
    #[error("endpoint path must start with '/': {raw}")]
    InvalidPath { raw: String },
}

/// Paths that differ between backend revisions.
///
/// Member creation has been served from both `/members` and `/api/members`,
/// and map points from `/map/locations` and `/api/map/locations`. Neither is
/// authoritative, so both are settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub members_create: String,
    pub map_locations: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            members_create: "/api/members".into(),
            map_locations: "/api/map/locations".into(),
        }
    }
}

/// Connection settings handed to the HTTP adapter at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    bearer_token: Option<String>,
    endpoints: Endpoints,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` unless `base_url` is an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBaseUrl {
            raw: base_url.to_string(),
        };
        let parsed = Url::parse(base_url.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        Ok(Self {
            base_url: parsed,
            bearer_token: None,
            endpoints: Endpoints::default(),
        })
    }

    /// Read `BLITZ_API_URL`, `BLITZ_API_TOKEN`, `BLITZ_MEMBERS_PATH` and
    /// `BLITZ_MAP_PATH` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provided value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provided value is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("BLITZ_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut endpoints = Endpoints::default();
        if let Some(path) = non_empty("BLITZ_MEMBERS_PATH") {
            endpoints.members_create = validate_path(path)?;
        }
        if let Some(path) = non_empty("BLITZ_MAP_PATH") {
            endpoints.map_locations = validate_path(path)?;
        }

        Ok(Self::new(&base_url)?
            .with_token(non_empty("BLITZ_API_TOKEN"))
            .with_endpoints(endpoints))
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Join `path` onto the base URL verbatim.
    ///
    /// Plain concatenation, not `Url::join`: a base with a path prefix such
    /// as `https://host/v1` must keep it, and some backend routes glue the
    /// id onto the collection name without a slash.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

fn validate_path(path: String) -> Result<String, ConfigError> {
    let path = path.trim().to_string();
    if path.starts_with('/') {
        Ok(path)
    } else {
        Err(ConfigError::InvalidPath { raw: path })
    }
}
