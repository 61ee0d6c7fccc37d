//! Voice settings operations.

use super::core::ElevenLabsClient;
use crate::transport::ApiRequest;
use crate::types::{EditVoiceSettings, VoiceSettings};
use crate::Result;

impl ElevenLabsClient {
    /// Effective settings of a voice. Optional fields the service omits stay `None`.
    pub async fn get_voice_settings(&self, voice_id: &str) -> Result<VoiceSettings> {
        self.transport
            .json(ApiRequest::get(
                "get_voice_settings",
                &["voices", voice_id, "settings"],
            ))
            .await
    }

    /// Full replace of a voice's settings.
    pub async fn update_voice_settings(
        &self,
        voice_id: &str,
        settings: &VoiceSettings,
    ) -> Result<VoiceSettings> {
        let request = ApiRequest::post(
            "update_voice_settings",
            &["voices", voice_id, "settings", "edit"],
        )
        .json_body(settings)?;
        self.transport.json(request).await
    }

    /// Partial update; unset optional fields are not sent.
    pub async fn edit_voice_settings(
        &self,
        voice_id: &str,
        settings: &EditVoiceSettings,
    ) -> Result<VoiceSettings> {
        let request = ApiRequest::post(
            "edit_voice_settings",
            &["voices", voice_id, "settings", "edit"],
        )
        .json_body(settings)?;
        self.transport.json(request).await
    }
}
