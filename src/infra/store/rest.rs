//! PostgREST-style pass-through client for the hosted data platform.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{NewPost, NewReply, Post, PostId, Reply, ReplyId, StoreError};
use crate::infra::app_config::AppConfig;

use super::ForumStore;

/// REST client for the platform's `posts` and `replies` collections.
///
/// Every request carries the anon key both as `apikey` and as a bearer
/// token; row-level security on the platform side decides what each
/// authenticated user may actually touch.
pub struct RestForumStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestForumStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from loaded configuration. Fails when the platform
    /// URL or key is missing, mirroring the platform client's own startup
    /// check.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let url = config
            .store_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("missing store URL (set HAVEN_STORE_URL)"))?;
        let key = config
            .store_anon_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("missing store key (set HAVEN_STORE_KEY)"))?;
        Ok(Self::new(url, key))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    async fn select_ordered<T: DeserializeOwned>(
        &self,
        table: &str,
        order: &str,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .authed(self.http.get(self.table_url(table)))
            .query(&[("select", "*"), ("order", order)])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn insert_row<T: serde::Serialize>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<(), StoreError> {
        let response = self
            .authed(self.http.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .authed(self.http.delete(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}

/// Error body shape returned by the platform's REST layer.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<RestErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or(body);
    Err(StoreError::Unavailable(format!("{status}: {message}")))
}

#[async_trait]
impl ForumStore for RestForumStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.select_ordered("posts", "created_at.desc").await
    }

    async fn list_replies(&self) -> Result<Vec<Reply>, StoreError> {
        self.select_ordered("replies", "created_at.asc").await
    }

    async fn insert_post(&self, post: NewPost) -> Result<(), StoreError> {
        self.insert_row("posts", &post).await
    }

    async fn insert_reply(&self, reply: NewReply) -> Result<(), StoreError> {
        self.insert_row("replies", &reply).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), StoreError> {
        self.delete_by_id("posts", id).await
    }

    async fn delete_reply(&self, id: &ReplyId) -> Result<(), StoreError> {
        self.delete_by_id("replies", id).await
    }
}
