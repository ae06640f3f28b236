//! HTTP request wrapper for the Sealia REST API.
//!
//! [`ApiClient`] issues one request per call and normalizes the outcome:
//!
//! 1. Resolve the path against the base URL (absolute URLs pass through)
//! 2. Attach `Content-Type: application/json` and, if the token store holds
//!    a token, `Authorization: Bearer <token>`
//! 3. Send the request once (no retry, no timeout, no backoff)
//! 4. Map a non-success status to [`ClientError::Api`], otherwise parse the JSON body

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::ClientError;
use crate::token::{FileTokenStore, TokenStore};

/// Client for the Sealia REST API.
///
/// Cloning is cheap: clones share the connection pool and the token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url` using `tokens` as the credential store.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        Url::parse(base_url)?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Create a client from configuration, persisting the token to the configured file.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let store = FileTokenStore::new(config.token_file.clone());
        Self::new(&config.api_url, Arc::new(store))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a request path into the URL that will be requested.
    ///
    /// `http`/`https` URLs are used verbatim. Anything else is appended to
    /// the base URL with exactly one `/` between them, so a path prefix on
    /// the base (such as `/api`) is kept.
    pub fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        if let Ok(url) = Url::parse(path)
            && matches!(url.scheme(), "http" | "https")
        {
            return Ok(url);
        }

        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(Url::parse(&joined)?)
    }

    /// Currently stored bearer token.
    pub fn token(&self) -> Result<Option<String>, ClientError> {
        Ok(self.tokens.load()?)
    }

    pub fn set_token(&self, token: &str) -> Result<(), ClientError> {
        self.tokens.save(token)?;
        tracing::debug!("Bearer token stored");
        Ok(())
    }

    pub fn clear_token(&self) -> Result<(), ClientError> {
        self.tokens.clear()?;
        tracing::debug!("Bearer token cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool, ClientError> {
        Ok(self.token()?.is_some())
    }

    /// Issue a single request and parse the JSON response into `T`.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP verb
    /// * `path` - absolute URL or path relative to the base URL
    /// * `query` - query pairs appended to the URL
    /// * `body` - optional JSON body
    ///
    /// # Errors
    ///
    /// - `Api`: the backend answered with a non-success status
    /// - `Http`: the request could not be sent or the body not read
    /// - `Json`: a success response was empty or not valid JSON for `T`
    /// - `TokenStore`: the token could not be read
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, ClientError> {
        // Resolve the path against the base URL and append query pairs
        let mut url = self.resolve(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        // Read on every call so a token set or cleared elsewhere takes effect immediately
        let token = self.tokens.load()?;

        tracing::debug!(%method, %url, authenticated = token.is_some(), "Sending API request");

        // JSON content type always, bearer credential only when a token is stored
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        // Single attempt, no retries
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // Non-2xx becomes an Api error carrying the server message
        if !status.is_success() {
            let err = ClientError::from_response(status, &bytes);
            tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "API request failed");
            return Err(err);
        }

        // Success bodies must be JSON
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, &[], None).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, &[], Some(&body)).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::POST, path, &[], None).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, &[], Some(&body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, &[], Some(&body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::DELETE, path, &[], None).await
    }
}
