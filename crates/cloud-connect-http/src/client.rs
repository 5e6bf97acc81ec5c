//! HTTP client wrapper and descriptor dispatch

use std::fmt;
use std::time::Instant;

use serde_json::Value;

use crate::error::{normalize_failure, HttpError, Result};
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// HTTP verb a descriptor is dispatched with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
}

impl Verb {
    fn into_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        };
        write!(f, "{verb}")
    }
}

/// HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create an HttpClient from a preconfigured `reqwest::Client`
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// GET the descriptor
    pub async fn get(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.dispatch(Verb::Get, request).await
    }

    /// POST the descriptor
    pub async fn post(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.dispatch(Verb::Post, request).await
    }

    /// PUT the descriptor
    pub async fn put(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.dispatch(Verb::Put, request).await
    }

    /// DELETE the descriptor
    pub async fn delete(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.dispatch(Verb::Delete, request).await
    }

    /// Dispatch a descriptor and deliver exactly one terminal outcome.
    ///
    /// Query parameters and headers pass through verbatim. Body parameters
    /// are serialized as JSON text when the descriptor's `Content-Type`
    /// header is `application/json`, and as form data otherwise. Non-2xx
    /// responses are normalized through the failure-payload rules; transport
    /// errors and timeouts map to their dedicated [`HttpError`] variants.
    pub async fn dispatch(&self, verb: Verb, request: &ApiRequest) -> Result<ApiResponse> {
        let uri = request.uri();
        let mut builder = self.inner.request(verb.into_method(), &uri);

        if let Some(query) = request.query_parameters() {
            builder = builder.query(query);
        }

        if let Some(body) = request.body_parameters() {
            let json_body = request.header("Content-Type") == Some("application/json");
            if json_body {
                builder = builder.body(serde_json::to_string(body)?);
            } else {
                builder = builder.form(body);
            }
        }

        if let Some(headers) = request.headers() {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        tracing::debug!("dispatching {verb} {uri}");
        let started = Instant::now();

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => return Err(transport_error(err, started)),
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let text = response
            .text()
            .await
            .map_err(|err| transport_error(err, started))?;

        if !(200..300).contains(&status) {
            tracing::debug!("{verb} {uri} failed with status {status}");
            return Err(normalize_failure("Request failed", &text));
        }

        let body = serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text));
        Ok(ApiResponse {
            body,
            headers,
            status,
        })
    }
}

fn transport_error(err: reqwest::Error, started: Instant) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout {
            elapsed_ms: started.elapsed().as_millis(),
        }
    } else if err.is_connect() {
        HttpError::Connection(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}
