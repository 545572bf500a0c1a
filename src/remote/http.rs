use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::RemoteConfig;
use crate::feedback::{FeedbackId, FeedbackPatch, FeedbackRecord, NewFeedback};

use super::client::CollectionClient;
use super::error::TransportError;

/// Longest error body carried into an error message.
const MAX_ERROR_BODY: usize = 200;

/// Client for the `/feedback` collection endpoint.
pub struct HttpCollectionClient {
    client: Client,
    base_url: String,
}

impl HttpCollectionClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/feedback", self.base_url)
    }

    fn record_url(&self, id: &FeedbackId) -> String {
        format!("{}/feedback/{}", self.base_url, id)
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        url: &str,
        id: Option<&FeedbackId>,
    ) -> Result<Response, TransportError> {
        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Connection {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(TransportError::NotFound { id: id.clone() });
        }

        let mut message = response.text().await.unwrap_or_default();
        if message.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| message.is_char_boundary(*i))
                .unwrap_or(0);
            message.truncate(cut);
        }
        Err(TransportError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, TransportError> {
        response
            .json::<T>()
            .await
            .map_err(|source| TransportError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl CollectionClient for HttpCollectionClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn list(&self) -> Result<Vec<FeedbackRecord>, TransportError> {
        let url = format!("{}?_sort=id&_order=desc", self.collection_url());
        tracing::debug!(url = %url, "Listing feedback");
        let response = self.send(self.client.get(&url), &url, None).await?;
        Self::decode(response, &url).await
    }

    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, TransportError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, rating = feedback.rating.get(), "Creating feedback");
        let response = self
            .send(self.client.post(&url).json(&feedback), &url, None)
            .await?;
        Self::decode(response, &url).await
    }

    async fn update(
        &self,
        id: &FeedbackId,
        patch: FeedbackPatch,
    ) -> Result<FeedbackRecord, TransportError> {
        let url = self.record_url(id);
        tracing::debug!(url = %url, "Updating feedback");
        let response = self
            .send(self.client.put(&url).json(&patch), &url, Some(id))
            .await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, id: &FeedbackId) -> Result<(), TransportError> {
        let url = self.record_url(id);
        tracing::debug!(url = %url, "Deleting feedback");
        self.send(self.client.delete(&url), &url, Some(id)).await?;
        Ok(())
    }
}
