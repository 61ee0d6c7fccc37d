use super::builder::ElevenLabsClientBuilder;
use crate::transport::HttpTransport;
use url::Url;

/// Base origin of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Typed client for the ElevenLabs API.
///
/// Holds the credential and an HTTP transport; nothing else. Every method
/// performs exactly one request and nothing is cached between calls, so a
/// client can be cloned and shared across tasks freely.
#[derive(Clone)]
pub struct ElevenLabsClient {
    pub(crate) transport: HttpTransport,
}

impl ElevenLabsClient {
    /// Client against the public API with a default transport.
    ///
    /// No request is made here and the key is not checked locally.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_parts(reqwest::Client::new(), default_base_url(), api_key.into())
    }

    pub fn builder() -> ElevenLabsClientBuilder {
        ElevenLabsClientBuilder::new()
    }

    pub(crate) fn from_parts(http_client: reqwest::Client, base_url: Url, api_key: String) -> Self {
        Self {
            transport: HttpTransport::new(http_client, base_url, api_key),
        }
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url().as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
}
