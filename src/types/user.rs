//! Account and subscription records.

use super::lenient::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub subscription: Subscription,
    #[serde(deserialize_with = "null_as_default")]
    pub is_new_user: bool,
    pub xi_api_key: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_delayed_payment_methods: bool,
}

/// Usage counters and capability flags of the account's plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(deserialize_with = "null_as_default")]
    pub tier: String,
    /// e.g. "trialing", "active"
    pub status: Option<String>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub character_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub character_limit: u64,
    pub next_character_count_reset_unix: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub professional_voice_limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_voice_add_edits: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_add_edit_counter: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_to_extend_character_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_extend_character_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_extend_voice_limit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_instant_voice_cloning: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_use_professional_voice_cloning: bool,
}

impl Subscription {
    pub fn characters_remaining(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }
}
