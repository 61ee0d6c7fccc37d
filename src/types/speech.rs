//! Text-to-speech request types.

use super::settings::VoiceSettings;
use serde::{Deserialize, Serialize};

/// Model used when a request does not name one.
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "mp3_44100")]
    Mp3_44100,
    #[serde(rename = "pcm_16000")]
    Pcm16000,
    #[serde(rename = "pcm_22050")]
    Pcm22050,
    #[serde(rename = "pcm_24000")]
    Pcm24000,
    #[serde(rename = "pcm_44100")]
    Pcm44100,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3_44100 => "mp3_44100",
            Self::Pcm16000 => "pcm_16000",
            Self::Pcm22050 => "pcm_22050",
            Self::Pcm24000 => "pcm_24000",
            Self::Pcm44100 => "pcm_44100",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3_44100 => "audio/mpeg",
            _ => "audio/pcm",
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        match self {
            Self::Mp3_44100 | Self::Pcm44100 => 44_100,
            Self::Pcm16000 => 16_000,
            Self::Pcm22050 => 22_050,
            Self::Pcm24000 => 24_000,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Streaming latency hint, `0` (none) through `4` (max, text normalizer off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StreamingLatency {
    Default = 0,
    Normal = 1,
    Strong = 2,
    Max = 3,
    MaxWithoutNormalizer = 4,
}

impl StreamingLatency {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `None` for values outside `0..=4`.
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Default),
            1 => Some(Self::Normal),
            2 => Some(Self::Strong),
            3 => Some(Self::Max),
            4 => Some(Self::MaxWithoutNormalizer),
            _ => None,
        }
    }
}

/// Parameters for a synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextToSpeechRequest {
    pub voice_id: String,
    pub text: String,
    /// Falls back to [`DEFAULT_MODEL_ID`] when `None`.
    pub model_id: Option<String>,
    pub voice_settings: VoiceSettings,
    pub optimize_streaming_latency: Option<StreamingLatency>,
    pub output_format: Option<OutputFormat>,
}

impl TextToSpeechRequest {
    pub fn new(
        voice_id: impl Into<String>,
        text: impl Into<String>,
        voice_settings: VoiceSettings,
    ) -> Self {
        Self {
            voice_id: voice_id.into(),
            text: text.into(),
            model_id: None,
            voice_settings,
            optimize_streaming_latency: None,
            output_format: None,
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn with_latency(mut self, latency: StreamingLatency) -> Self {
        self.optimize_streaming_latency = Some(latency);
        self
    }

    /// Model that will be sent on the wire.
    pub fn effective_model_id(&self) -> &str {
        self.model_id.as_deref().unwrap_or(DEFAULT_MODEL_ID)
    }

    pub(crate) fn body(&self) -> SpeechBody<'_> {
        SpeechBody {
            text: &self.text,
            model_id: self.effective_model_id(),
            voice_settings: &self.voice_settings,
        }
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(latency) = self.optimize_streaming_latency {
            query.push(("optimize_streaming_latency", latency.as_u8().to_string()));
        }
        if let Some(format) = self.output_format {
            query.push(("output_format", format.as_str().to_string()));
        }
        query
    }
}

/// JSON body of the synthesis endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct SpeechBody<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
    pub voice_settings: &'a VoiceSettings,
}
