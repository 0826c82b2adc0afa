//! `reqwest` implementation of the message service client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use truetalk::{ChatError, MessageApi, MessageRecord, NewMessage};

#[derive(Clone, Debug)]
pub struct ReqwestMessageApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestMessageApi {
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend cannot start.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait(?Send)]
impl MessageApi for ReqwestMessageApi {
    async fn list(&self) -> Result<Vec<MessageRecord>, ChatError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn create(&self, message: &NewMessage) -> Result<MessageRecord, ChatError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(message)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ChatError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ChatError::Status {
            status: status.as_u16(),
            body: body.trim().to_owned(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ChatError::Decode(e.to_string()))
}
