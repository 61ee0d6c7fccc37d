//! # elevenlabs-rust
//!
//! Typed async client for the ElevenLabs text-to-speech and voice management API.
//!
//! ## Overview
//!
//! [`ElevenLabsClient`] holds one API key and exposes one method per remote
//! operation. Each method performs a single HTTP round trip through a shared
//! dispatcher that attaches the `xi-api-key` header, negotiates the response
//! type and maps every failure into [`Error::RequestFailed`].
//!
//! There is deliberately no retry, caching, pagination or rate limiting.
//! Timeouts and proxies come from the injected `reqwest::Client`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_rust::types::{TextToSpeechRequest, VoiceSettings};
//! use elevenlabs_rust::ElevenLabsClient;
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_rust::Result<()> {
//!     let client = ElevenLabsClient::new("your-api-key");
//!
//!     let voices = client.list_voices().await?;
//!     let voice = &voices[0];
//!
//!     let request = TextToSpeechRequest::new(
//!         voice.voice_id.clone(),
//!         "Hello from Rust!",
//!         VoiceSettings::new(0.5, 0.75),
//!     );
//!     let audio = client.synthesize_speech(&request).await?;
//!     std::fs::write("hello.mp3", &audio).ok();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and the operation surface |
//! | [`types`] | Request and response records |
//! | [`stream`] | Live audio handle for streaming synthesis |
//! | [`transport`] | Shared request dispatcher |
//! | [`error`] | Error type and context |

pub mod client;
pub mod error;
pub mod stream;
pub mod transport;
pub mod types;

pub use client::{ElevenLabsClient, ElevenLabsClientBuilder};
pub use error::{Error, ErrorContext};
pub use stream::AudioStream;

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;
