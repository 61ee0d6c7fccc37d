use crate::stream::AudioStream;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the credential on every call.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// How the response body of a call is negotiated and consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseKind {
    /// `accept: application/json`, body decoded with serde.
    Json,
    /// `accept: */*` with a JSON request body, body handed back as raw audio.
    Audio,
}

impl ResponseKind {
    fn accept(self) -> &'static str {
        match self {
            ResponseKind::Json => "application/json",
            ResponseKind::Audio => "*/*",
        }
    }
}

/// One outbound call: operation name (for errors and logs), verb, path
/// segments below the base URL, optional query and JSON body.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    operation: &'static str,
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
    kind: ResponseKind,
}

impl ApiRequest {
    pub fn new(operation: &'static str, method: Method, segments: &[&str]) -> Self {
        Self {
            operation,
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
            kind: ResponseKind::Json,
        }
    }

    pub fn get(operation: &'static str, segments: &[&str]) -> Self {
        Self::new(operation, Method::GET, segments)
    }

    pub fn post(operation: &'static str, segments: &[&str]) -> Self {
        Self::new(operation, Method::POST, segments)
    }

    pub fn delete(operation: &'static str, segments: &[&str]) -> Self {
        Self::new(operation, Method::DELETE, segments)
    }

    pub fn json_body<B: serde::Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            Error::request_failed(
                format!("{} failed to encode request body: {}", self.operation, e),
                ErrorContext::new().with_source(self.operation),
                e,
            )
        })?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn audio(mut self) -> Self {
        self.kind = ResponseKind::Audio;
        self
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Shared dispatcher: owns the transport, base URL and credential.
#[derive(Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, base_url: Url, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with the request's path segments appended (each percent-encoded).
    pub fn endpoint(&self, segments: &[String]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }

    /// Issue the call and return the response once its status is known to be a success.
    async fn send(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let ApiRequest {
            operation,
            method,
            segments,
            query,
            body,
            kind,
        } = request;
        let url = self.endpoint(&segments);
        debug!(
            operation,
            method = %method,
            path = url.path(),
            kind = ?kind,
            "dispatching request"
        );

        let mut req = self
            .client
            .request(method, url)
            .header(ACCEPT, kind.accept())
            .header(API_KEY_HEADER, &self.api_key);
        if !query.is_empty() {
            req = req.query(&query);
        }
        // Set before `json()`, which only adds a content type when none is present.
        if kind == ResponseKind::Audio {
            req = req.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await.map_err(|e| {
            warn!(operation, error = %e, "request could not be completed");
            Error::request_failed(
                format!("{} failed: {}", operation, e),
                ErrorContext::new().with_source(operation),
                e,
            )
        })?;

        let status = response.status();
        if let Err(e) = response.error_for_status_ref().map(|_| ()) {
            let body = response.text().await.unwrap_or_default();
            warn!(operation, status = status.as_u16(), "remote service returned an error status");
            let mut context = ErrorContext::new()
                .with_source(operation)
                .with_status(status.as_u16());
            if !body.is_empty() {
                context = context.with_details(body);
            }
            return Err(Error::request_failed(
                format!("{} failed: HTTP {}", operation, status),
                context,
                e,
            ));
        }
        Ok(response)
    }

    async fn read_body(operation: &'static str, response: reqwest::Response) -> Result<Bytes> {
        let status = response.status().as_u16();
        response.bytes().await.map_err(|e| {
            warn!(operation, error = %e, "failed to read response body");
            Error::request_failed(
                format!("{} failed to read response: {}", operation, e),
                ErrorContext::new().with_source(operation).with_status(status),
                e,
            )
        })
    }

    /// JSON round trip decoded into `T`.
    pub async fn json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let operation = request.operation();
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let bytes = Self::read_body(operation, response).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(operation, error = %e, "failed to decode response body");
            Error::request_failed(
                format!("{} failed to decode response: {}", operation, e),
                ErrorContext::new()
                    .with_source(operation)
                    .with_status(status)
                    .with_details(String::from_utf8_lossy(&bytes)),
                e,
            )
        })
    }

    /// Round trip whose body carries nothing the caller needs. The body is still drained.
    pub async fn discard(&self, request: ApiRequest) -> Result<()> {
        let operation = request.operation();
        let response = self.send(request).await?;
        Self::read_body(operation, response).await.map(|_| ())
    }

    /// Whole response body as one buffer.
    pub async fn bytes(&self, request: ApiRequest) -> Result<Bytes> {
        let operation = request.operation();
        let response = self.send(request).await?;
        Self::read_body(operation, response).await
    }

    /// Live handle over the response body.
    pub async fn stream(&self, request: ApiRequest) -> Result<AudioStream> {
        let operation = request.operation();
        let response = self.send(request).await?;
        Ok(AudioStream::from_response(operation, response))
    }
}
