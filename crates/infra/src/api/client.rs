//! API client for the deal-desk service
//!
//! Issues one request per call against the configured origin and maps every
//! failure to an [`ApiError`] tagged with the [`Operation`] that failed. The
//! client logs exactly one error event per failed operation; lower layers
//! only emit debug events.

use std::borrow::Cow;
use std::time::Duration;

use dealdesk_domain::ApiConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use super::errors::ApiError;
use super::operations::Operation;
use crate::http::HttpClient;

/// Percent-encode a caller-supplied value for use as one path segment.
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// API client bound to one deal-desk origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Wrap an existing HTTP client. A trailing slash on `base_url` is
    /// dropped so paths can always start with `/`.
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Build the HTTP client from API settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder.build().map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self::new(http, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute a GET request
    #[instrument(skip(self, operation), fields(operation = operation.name()))]
    pub async fn get<R: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<R, ApiError> {
        let request = self.http.request(Method::GET, self.url(path));
        self.finish(operation, path, self.exchange(operation, Ok(request)).await)
    }

    /// Execute a POST request with a JSON body
    #[instrument(skip(self, operation, body), fields(operation = operation.name()))]
    pub async fn post<B, R>(&self, operation: Operation, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.with_json(operation, Method::POST, path, body);
        self.finish(operation, path, self.exchange(operation, request).await)
    }

    /// Execute a POST request whose inputs travel in the path and query only
    #[instrument(skip(self, operation), fields(operation = operation.name()))]
    pub async fn post_empty<R: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<R, ApiError> {
        let request = self
            .http
            .request(Method::POST, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        self.finish(operation, path, self.exchange(operation, Ok(request)).await)
    }

    /// Execute a PUT request with a JSON body
    #[instrument(skip(self, operation, body), fields(operation = operation.name()))]
    pub async fn put<B, R>(&self, operation: Operation, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.with_json(operation, Method::PUT, path, body);
        self.finish(operation, path, self.exchange(operation, request).await)
    }

    /// Execute a PUT request where only the status matters.
    ///
    /// Any 2xx body is drained and dropped, including plain-text
    /// acknowledgements the server sends instead of JSON.
    #[instrument(skip(self, operation, body), fields(operation = operation.name()))]
    pub async fn put_discarding<B>(
        &self,
        operation: Operation,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.with_json(operation, Method::PUT, path, body);
        let outcome = self.send(operation, request).await.map(|_| ());
        self.finish(operation, path, outcome)
    }

    /// Execute a DELETE request, ignoring any response body
    #[instrument(skip(self, operation), fields(operation = operation.name()))]
    pub async fn delete(&self, operation: Operation, path: &str) -> Result<(), ApiError> {
        let request = self.http.request(Method::DELETE, self.url(path));
        let outcome = self.send(operation, Ok(request)).await.map(|_| ());
        self.finish(operation, path, outcome)
    }

    /// Execute a GET request that treats 404 as "no such record"
    #[instrument(skip(self, operation), fields(operation = operation.name()))]
    pub async fn get_optional<R: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<Option<R>, ApiError> {
        let request = self.http.request(Method::GET, self.url(path));
        let outcome = match self.send(operation, Ok(request)).await {
            Ok((status, body)) => decode_body(operation, status, &body),
            Err(ApiError::Status { status: StatusCode::NOT_FOUND, .. }) => {
                debug!(path, "record not found");
                Ok(None)
            }
            Err(err) => Err(err),
        };
        self.finish(operation, path, outcome)
    }

    fn with_json<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<RequestBuilder, ApiError> {
        let payload =
            serde_json::to_vec(body).map_err(|source| ApiError::Encode { operation, source })?;
        Ok(self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(payload))
    }

    async fn exchange<R: DeserializeOwned>(
        &self,
        operation: Operation,
        request: Result<RequestBuilder, ApiError>,
    ) -> Result<R, ApiError> {
        let (status, body) = self.send(operation, request).await?;
        decode_body(operation, status, &body)
    }

    /// Send the request and drain the body; non-2xx statuses become errors.
    async fn send(
        &self,
        operation: Operation,
        request: Result<RequestBuilder, ApiError>,
    ) -> Result<(StatusCode, String), ApiError> {
        let response = self
            .http
            .send(request?)
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        let status = response.status();
        let body =
            response.text().await.map_err(|source| ApiError::Transport { operation, source })?;

        if !status.is_success() {
            return Err(ApiError::Status { operation, status, body });
        }
        Ok((status, body))
    }

    fn finish<R>(
        &self,
        operation: Operation,
        path: &str,
        outcome: Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        match &outcome {
            Ok(_) => info!(operation = operation.name(), path, "request successful"),
            Err(err) => error!(
                operation = operation.name(),
                path,
                status = ?err.status(),
                cause = %err.cause(),
                "{}",
                operation.log_context()
            ),
        }
        outcome
    }
}

fn decode_body<R: DeserializeOwned>(
    operation: Operation,
    status: StatusCode,
    body: &str,
) -> Result<R, ApiError> {
    // An empty body decodes as JSON null so `()`/`Option` targets accept 204s
    let text = if body.trim().is_empty() {
        debug!(%status, "empty response body");
        "null"
    } else {
        body
    };
    serde_json::from_str(text).map_err(|source| ApiError::Decode { operation, source })
}
