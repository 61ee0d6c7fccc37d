//! Binary asset metadata: uploaded files, voice samples and verification recordings.

use super::lenient::null_as_default;
use serde::{Deserialize, Serialize};

/// Uploaded file descriptor, used when creating or editing a voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(deserialize_with = "null_as_default")]
    pub file_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_date_unix: i64,
}

/// Audio sample attached to a voice. Content-addressed by `hash`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    #[serde(deserialize_with = "null_as_default")]
    pub sample_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
}

/// Recording submitted during a fine-tuning verification attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recording {
    #[serde(deserialize_with = "null_as_default")]
    pub recording_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size_bytes: u64,
    pub transcription: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_date_unix: i64,
}
