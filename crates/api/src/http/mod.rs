use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::repository::{ApiError, Backend};

mod dashboard_repo;
mod delivery_repo;
mod group_repo;
mod institution_repo;
mod map_repo;
mod member_repo;
mod report_repo;

/// REST adapter for the Blitz backend. One instance serves every resource.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    config: Arc<ApiConfig>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpInitError {
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl HttpRepository {
    /// # Errors
    ///
    /// Returns `HttpInitError` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, HttpInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!(%method, %url, "backend request");
        let request = self.client.request(method, url);
        match self.config.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = checked(self.request(Method::GET, path).send().await?)?;
        let bytes = response.bytes().await?;
        decode(&bytes)
    }

    /// GET a collection; a `null` or empty body is an empty list.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let list: Option<Vec<T>> = self.get_json(path).await?;
        Ok(list.unwrap_or_default())
    }

    pub(crate) async fn send_json<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        checked(self.request(method, path).json(body).send().await?)?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        checked(self.request(Method::DELETE, path).send().await?)?;
        Ok(())
    }
}

fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    warn!(%status, url = %response.url(), "backend request failed");
    if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl Backend {
    /// Build a `Backend` that talks to the REST API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the HTTP client cannot be built.
    pub fn http(config: ApiConfig) -> Result<Self, HttpInitError> {
        let repo = HttpRepository::new(config)?;
        Ok(Self {
            groups: Arc::new(repo.clone()),
            institutions: Arc::new(repo.clone()),
            members: Arc::new(repo.clone()),
            deliveries: Arc::new(repo.clone()),
            dashboard: Arc::new(repo.clone()),
            map: Arc::new(repo.clone()),
            reports: Arc::new(repo),
        })
    }
}
