//! Voice records and their nested fine-tuning and sharing sub-records.

use super::file::{File, Recording, Sample};
use super::lenient::{bare_or_wrapped, null_as_default};
use super::settings::VoiceSettings;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Open label map (accent, gender, age, ...). Values are opaque.
pub type Labels = HashMap<String, serde_json::Value>;

/// A configured synthesis persona on the remote service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
    #[serde(deserialize_with = "null_as_default")]
    pub voice_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub samples: Vec<Sample>,
    pub settings: Option<VoiceSettings>,
    pub fine_tuning: Option<FineTuning>,
    pub sharing: Option<Sharing>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Labels,
    #[serde(deserialize_with = "null_as_default")]
    pub available_for_tiers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub high_quality_base_model_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuning {
    #[serde(deserialize_with = "null_as_default")]
    pub fine_tuning_requested: bool,
    /// e.g. "not_started"
    pub finetuning_state: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_allowed_to_fine_tune: bool,
    pub language: Option<String>,
    pub manual_verification: Option<ManualVerification>,
    #[serde(deserialize_with = "null_as_default")]
    pub manual_verification_requested: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub slice_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_attempts: Vec<VerificationAttempt>,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_attempts_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub verification_failures: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualVerification {
    pub extra_text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub files: Vec<File>,
    #[serde(deserialize_with = "null_as_default")]
    pub request_time_unix: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationAttempt {
    #[serde(deserialize_with = "null_as_default")]
    pub accepted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub date_unix: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub levenshtein_distance: f64,
    pub recording: Option<Recording>,
    #[serde(deserialize_with = "null_as_default")]
    pub similarity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// Publication state of a voice in the shared library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sharing {
    #[serde(deserialize_with = "null_as_default")]
    pub cloned_by_count: u64,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled_in_library: bool,
    pub history_item_sample_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Labels,
    #[serde(deserialize_with = "null_as_default")]
    pub liked_by_count: u64,
    pub name: Option<String>,
    pub original_voice_id: Option<String>,
    pub public_owner_id: Option<String>,
    pub review_message: Option<String>,
    /// e.g. "not_requested"
    pub review_status: Option<String>,
    /// e.g. "enabled"
    pub status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub whitelisted_emails: Vec<String>,
}

/// `GET /voices` is answered either with a bare array or wrapped in `{"voices": [...]}`.
#[derive(Debug)]
pub(crate) struct VoiceList(Vec<Voice>);

impl<'de> Deserialize<'de> for VoiceList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bare_or_wrapped(deserializer, "voices").map(VoiceList)
    }
}

impl From<VoiceList> for Vec<Voice> {
    fn from(list: VoiceList) -> Self {
        list.0
    }
}

/// Body of `POST /voices/add` and `POST /voices/{voice_id}/edit`.
#[derive(Debug, Serialize)]
pub(crate) struct VoiceUpload<'a> {
    pub name: &'a str,
    pub files: &'a [File],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_voice_decodes_with_defaults() {
        let voice: Voice = serde_json::from_value(json!({
            "voice_id": "21m00Tcm4TlvDq8ikWAM",
            "name": "Rachel"
        }))
        .unwrap();
        assert_eq!(voice.voice_id, "21m00Tcm4TlvDq8ikWAM");
        assert!(voice.samples.is_empty());
        assert!(voice.settings.is_none());
        assert!(voice.labels.is_empty());
    }

    #[test]
    fn labels_keep_opaque_values() {
        let voice: Voice = serde_json::from_value(json!({
            "voice_id": "v1",
            "name": "n",
            "labels": {"accent": "american", "age": 30, "tags": ["calm"]}
        }))
        .unwrap();
        assert_eq!(voice.labels["accent"], json!("american"));
        assert_eq!(voice.labels["age"], json!(30));
        assert_eq!(voice.labels["tags"], json!(["calm"]));
    }

    #[test]
    fn nested_fine_tuning_decodes() {
        let voice: Voice = serde_json::from_value(json!({
            "voice_id": "v1",
            "name": "n",
            "fine_tuning": {
                "finetuning_state": "not_started",
                "verification_attempts": [{
                    "accepted": true,
                    "similarity": 0.91,
                    "text": "hello",
                    "recording": {"recording_id": "r1", "mime_type": "audio/mpeg", "size_bytes": 10}
                }]
            }
        }))
        .unwrap();
        let ft = voice.fine_tuning.unwrap();
        assert_eq!(ft.finetuning_state.as_deref(), Some("not_started"));
        let attempt = &ft.verification_attempts[0];
        assert!(attempt.accepted);
        assert_eq!(attempt.recording.as_ref().unwrap().recording_id, "r1");
    }

    #[test]
    fn voice_list_accepts_both_shapes() {
        let bare: VoiceList =
            serde_json::from_value(json!([{"voice_id": "a", "name": "A"}])).unwrap();
        let wrapped: VoiceList =
            serde_json::from_value(json!({"voices": [{"voice_id": "b", "name": "B"}]})).unwrap();
        assert_eq!(Vec::<Voice>::from(bare)[0].voice_id, "a");
        assert_eq!(Vec::<Voice>::from(wrapped)[0].voice_id, "b");
    }

    #[test]
    fn explicit_nulls_decode_as_defaults() {
        let voice: Voice = serde_json::from_value(json!({
            "voice_id": "v1",
            "name": "Rachel",
            "samples": null,
            "labels": null,
            "sharing": null,
            "fine_tuning": {
                "language": null,
                "verification_attempts": null,
                "slice_ids": null,
                "manual_verification": null,
                "is_allowed_to_fine_tune": null
            }
        }))
        .unwrap();
        assert!(voice.samples.is_empty());
        assert!(voice.labels.is_empty());
        assert!(voice.sharing.is_none());
        let ft = voice.fine_tuning.unwrap();
        assert!(ft.verification_attempts.is_empty());
        assert!(ft.slice_ids.is_empty());
        assert!(ft.manual_verification.is_none());
        assert!(!ft.is_allowed_to_fine_tune);
    }

    #[test]
    fn wrapped_list_reports_the_bad_field() {
        let err = serde_json::from_value::<VoiceList>(json!({"voices": [{"voice_id": 5}]}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid type: integer `5`"), "{}", err);
    }
}
