use super::core::{default_base_url, ElevenLabsClient};
use crate::{Error, Result};
use url::Url;

/// Environment variable consulted when no key is given to the builder.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// Builder for clients with a custom base URL or transport.
///
/// Keep this surface small: the credential is the only thing the API needs.
pub struct ElevenLabsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ElevenLabsClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            http_client: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base URL (mock servers, proxies).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a preconfigured transport. Timeouts, proxies and TLS settings live there.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<ElevenLabsClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                Error::configuration(format!("API key required (set {})", API_KEY_ENV))
            })?;
        let base_url = match self.base_url {
            Some(raw) => {
                let url = Url::parse(&raw)
                    .map_err(|e| Error::configuration(format!("Invalid base URL {}: {}", raw, e)))?;
                if url.cannot_be_a_base() {
                    return Err(Error::configuration(format!(
                        "Base URL {} cannot carry a path",
                        raw
                    )));
                }
                url
            }
            None => default_base_url(),
        };
        let http_client = self.http_client.unwrap_or_default();
        Ok(ElevenLabsClient::from_parts(http_client, base_url, api_key))
    }
}

impl Default for ElevenLabsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
