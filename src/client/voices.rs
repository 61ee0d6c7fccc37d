//! Voice directory operations.

use super::core::ElevenLabsClient;
use crate::transport::ApiRequest;
use crate::types::voice::{VoiceList, VoiceUpload};
use crate::types::{File, Voice};
use crate::Result;

impl ElevenLabsClient {
    /// All voices available to the account, in one call.
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        let list: VoiceList = self
            .transport
            .json(ApiRequest::get("list_voices", &["voices"]))
            .await?;
        Ok(list.into())
    }

    pub async fn get_voice(&self, voice_id: &str) -> Result<Voice> {
        self.transport
            .json(ApiRequest::get("get_voice", &["voices", voice_id]))
            .await
    }

    /// Create a voice from sample files. The returned record carries the new `voice_id`.
    pub async fn create_voice(&self, name: &str, files: &[File]) -> Result<Voice> {
        let request = ApiRequest::post("create_voice", &["voices", "add"])
            .json_body(&VoiceUpload { name, files })?;
        self.transport.json(request).await
    }

    /// Replace the name and samples of an existing voice.
    pub async fn update_voice(&self, voice_id: &str, name: &str, files: &[File]) -> Result<Voice> {
        let request = ApiRequest::post("update_voice", &["voices", voice_id, "edit"])
            .json_body(&VoiceUpload { name, files })?;
        self.transport.json(request).await
    }

    /// Deleting an already-deleted voice fails with whatever the service answers.
    pub async fn delete_voice(&self, voice_id: &str) -> Result<()> {
        self.transport
            .discard(ApiRequest::delete("delete_voice", &["voices", voice_id]))
            .await
    }
}
