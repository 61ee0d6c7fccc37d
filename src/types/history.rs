//! Synthesis history records.

use super::lenient::{bare_or_wrapped, null_as_default};
use super::settings::VoiceSettings;
use serde::{Deserialize, Deserializer, Serialize};

/// One past synthesis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryItem {
    #[serde(deserialize_with = "null_as_default")]
    pub history_item_id: String,
    pub request_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_id: String,
    pub voice_name: Option<String>,
    /// e.g. "premade"
    pub voice_category: Option<String>,
    pub model_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    pub settings: Option<VoiceSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub character_count_change_from: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub character_count_change_to: u64,
    pub content_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub date_unix: i64,
    /// e.g. "created"
    pub state: Option<String>,
    pub feedback: Option<Feedback>,
}

impl HistoryItem {
    /// Characters charged for this call.
    pub fn characters_used(&self) -> u64 {
        self.character_count_change_to
            .saturating_sub(self.character_count_change_from)
    }
}

/// User feedback attached to a history item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feedback {
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_up: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub feedback: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emotions: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inaccurate_clone: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub glitches: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_quality: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub other: bool,
    /// e.g. "not_reviewed"
    pub review_status: Option<String>,
}

/// `GET /history` is answered either with a bare array or wrapped in `{"history": [...]}`.
#[derive(Debug)]
pub(crate) struct HistoryList(Vec<HistoryItem>);

impl<'de> Deserialize<'de> for HistoryList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bare_or_wrapped(deserializer, "history").map(HistoryList)
    }
}

impl From<HistoryList> for Vec<HistoryItem> {
    fn from(list: HistoryList) -> Self {
        list.0
    }
}
