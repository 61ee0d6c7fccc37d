//! History and account lookups. Each call re-fetches.

use super::core::ElevenLabsClient;
use crate::transport::ApiRequest;
use crate::types::history::HistoryList;
use crate::types::{HistoryItem, Subscription, User};
use crate::Result;

impl ElevenLabsClient {
    pub async fn get_history(&self) -> Result<Vec<HistoryItem>> {
        let list: HistoryList = self
            .transport
            .json(ApiRequest::get("get_history", &["history"]))
            .await?;
        Ok(list.into())
    }

    pub async fn get_user(&self) -> Result<User> {
        self.transport
            .json(ApiRequest::get("get_user", &["user"]))
            .await
    }

    pub async fn get_subscription(&self) -> Result<Subscription> {
        self.transport
            .json(ApiRequest::get("get_subscription", &["user", "subscription"]))
            .await
    }
}
