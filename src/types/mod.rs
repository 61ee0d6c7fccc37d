//! # Types Module
//!
//! Typed views over the JSON payloads exchanged with the remote service.
//!
//! Response records are lenient: fields the service leaves out or sends as
//! `null` fall back to their defaults instead of failing the decode. None of these types are
//! cached or mutated by the client.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`voice`] | Voices, fine-tuning and sharing sub-records |
//! | [`settings`] | Voice tuning parameters |
//! | [`speech`] | Synthesis request, output formats, latency hint |
//! | [`history`] | Synthesis history and feedback |
//! | [`user`] | Account and subscription |
//! | [`file`] | Files, samples and recordings |

pub mod file;
pub mod history;
mod lenient;
pub mod settings;
pub mod speech;
pub mod user;
pub mod voice;

pub use file::{File, Recording, Sample};
pub use history::{Feedback, HistoryItem};
pub use settings::{EditVoiceSettings, VoiceSettings};
pub use speech::{OutputFormat, StreamingLatency, TextToSpeechRequest, DEFAULT_MODEL_ID};
pub use user::{Subscription, User};
pub use voice::{FineTuning, Labels, ManualVerification, Sharing, VerificationAttempt, Voice};
