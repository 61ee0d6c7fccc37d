//! Voice tuning parameters.
//!
//! Ranges are not checked locally; the remote service rejects values it does
//! not accept.

use serde::{Deserialize, Serialize};

/// Effective settings of a voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// "Stability" slider in the web app.
    pub stability: f64,
    /// "Clarity + Similarity Enhancement" slider in the web app.
    pub similarity_boost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl VoiceSettings {
    pub fn new(stability: f64, similarity_boost: f64) -> Self {
        Self {
            stability,
            similarity_boost,
            style: None,
            use_speaker_boost: None,
        }
    }

    pub fn with_style(mut self, style: f64) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_speaker_boost(mut self, enabled: bool) -> Self {
        self.use_speaker_boost = Some(enabled);
        self
    }
}

/// Partial settings update.
///
/// `style` and `use_speaker_boost` are left off the wire when unset so the
/// remote side applies its own defaults (currently `0` and `true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditVoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl EditVoiceSettings {
    pub fn new(stability: f64, similarity_boost: f64) -> Self {
        Self {
            stability,
            similarity_boost,
            style: None,
            use_speaker_boost: None,
        }
    }

    pub fn with_style(mut self, style: f64) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_speaker_boost(mut self, enabled: bool) -> Self {
        self.use_speaker_boost = Some(enabled);
        self
    }
}

impl From<VoiceSettings> for EditVoiceSettings {
    fn from(s: VoiceSettings) -> Self {
        Self {
            stability: s.stability,
            similarity_boost: s.similarity_boost,
            style: s.style,
            use_speaker_boost: s.use_speaker_boost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edit_settings_omits_unset_optionals() {
        let body = serde_json::to_value(EditVoiceSettings::new(0.4, 0.8)).unwrap();
        assert_eq!(body, json!({"stability": 0.4, "similarity_boost": 0.8}));
    }

    #[test]
    fn edit_settings_keeps_explicit_optionals() {
        let body = serde_json::to_value(
            EditVoiceSettings::new(0.4, 0.8)
                .with_style(0.0)
                .with_speaker_boost(false),
        )
        .unwrap();
        assert_eq!(body["style"], json!(0.0));
        assert_eq!(body["use_speaker_boost"], json!(false));
    }

    #[test]
    fn settings_response_without_optionals_decodes() {
        let s: VoiceSettings =
            serde_json::from_value(json!({"stability": 0.5, "similarity_boost": 0.75})).unwrap();
        assert_eq!(s, VoiceSettings::new(0.5, 0.75));
        assert!(s.style.is_none());
        assert!(s.use_speaker_boost.is_none());
    }

    #[test]
    fn settings_response_with_null_optionals_decodes() {
        let s: VoiceSettings = serde_json::from_value(json!({
            "stability": 0.5,
            "similarity_boost": 0.75,
            "style": null,
            "use_speaker_boost": true
        }))
        .unwrap();
        assert_eq!(s.style, None);
        assert_eq!(s.use_speaker_boost, Some(true));
    }
}
