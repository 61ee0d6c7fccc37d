//! Text-to-speech synthesis.

use super::core::ElevenLabsClient;
use crate::stream::AudioStream;
use crate::transport::ApiRequest;
use crate::types::TextToSpeechRequest;
use crate::Result;
use bytes::Bytes;

impl ElevenLabsClient {
    /// Render `request.text` with `request.voice_id` and return the complete audio.
    ///
    /// Resolves only once the whole body has arrived. Without a `model_id` the
    /// request uses [`crate::types::DEFAULT_MODEL_ID`].
    ///
    /// Routes are the live service's `/text-to-speech/{voice_id}` (and `/stream`);
    /// bodies are snake_case.
    pub async fn synthesize_speech(&self, request: &TextToSpeechRequest) -> Result<Bytes> {
        let api_request = ApiRequest::post(
            "synthesize_speech",
            &["text-to-speech", request.voice_id.as_str()],
        )
        .audio()
        .query(request.query())
        .json_body(&request.body())?;
        self.transport.bytes(api_request).await
    }

    /// Streaming variant of [`Self::synthesize_speech`] for `voice_id`.
    ///
    /// The returned handle yields chunks as they arrive; `request.voice_id` is
    /// not used for routing. Drain it or drop it to release the connection.
    pub async fn synthesize_speech_stream(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
    ) -> Result<AudioStream> {
        let api_request = ApiRequest::post(
            "synthesize_speech_stream",
            &["text-to-speech", voice_id, "stream"],
        )
        .audio()
        .query(request.query())
        .json_body(&request.body())?;
        self.transport.stream(api_request).await
    }
}
