//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use elevenlabs_rust::{ElevenLabsClient, ElevenLabsClientBuilder};
use mockito::{Mock, Server, ServerGuard};

pub const API_KEY: &str = "sk_test_0123456789abcdef";

/// Test fixture that owns a mock server and a client pointed at it
pub struct MockApi {
    pub server: ServerGuard,
    pub client: ElevenLabsClient,
}

impl MockApi {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = ElevenLabsClientBuilder::new()
            .api_key(API_KEY)
            .base_url(format!("{}/v1", server.url()))
            .build()
            .expect("Failed to build client");
        Self { server, client }
    }

    /// Mock a successful JSON response; the credential header must be present
    pub async fn mock_json(&mut self, method: &str, path: &str, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", API_KEY)
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock an audio response from a synthesis endpoint
    pub async fn mock_audio(&mut self, path: &str, audio: &[u8]) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("xi-api-key", API_KEY)
            .match_header("accept", "*/*")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(audio)
            .create_async()
            .await
    }

    /// Mock an error response for any path under `method`
    pub async fn mock_error_any(&mut self, method: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, mockito::Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Client whose base URL points at a port nothing listens on.
pub fn unreachable_client() -> ElevenLabsClient {
    ElevenLabsClientBuilder::new()
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:1/v1")
        .build()
        .expect("Failed to build client")
}

pub fn voice_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "voice_id": id,
        "name": name,
        "category": "premade",
        "description": null,
        "samples": [{
            "sample_id": format!("{}-s1", id),
            "file_name": "sample.mp3",
            "mime_type": "audio/mpeg",
            "size_bytes": 2048,
            "hash": "d41d8cd98f00b204e9800998ecf8427e"
        }],
        "settings": {"stability": 0.5, "similarity_boost": 0.75},
        "labels": {"accent": "american", "gender": "female"},
        "high_quality_base_model_ids": ["eleven_multilingual_v2"]
    })
}
