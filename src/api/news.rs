//! News feed endpoints.

use crate::Result;
use crate::api::read_json;
use crate::endpoints::news;
use crate::gateway::{CallKind, RateGateway};
use crate::models::news::{NewsProvider, NewsStory};

/// News feed endpoints.
#[derive(Debug, Clone)]
pub struct News {
    gateway: RateGateway,
}

impl News {
    pub(crate) fn new(gateway: RateGateway) -> Self {
        Self { gateway }
    }

    /// Get the news outlets CryptoCompare syndicates from.
    pub async fn list_providers(&self) -> Result<Vec<NewsProvider>> {
        let url = format!("{}{}", self.gateway.min_api_url(), news::PROVIDERS);
        let response = self.gateway.get_json(&url, CallKind::News).await?;
        read_json(response).await
    }

    /// Get the latest news articles.
    pub async fn list_stories(&self) -> Result<Vec<NewsStory>> {
        let url = format!("{}{}", self.gateway.min_api_url(), news::STORIES);
        let response = self.gateway.get_json(&url, CallKind::News).await?;
        read_json(response).await
    }
}
