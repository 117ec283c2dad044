//! In-memory store implementation (useful for testing and offline embedding).

use async_trait::async_trait;
use chrono::DateTime;
use parking_lot::Mutex;

use crate::domain::{NewPost, NewReply, Post, PostId, Reply, ReplyId, StoreError};

use super::ForumStore;

#[derive(Default)]
struct MemoryInner {
    posts: Vec<Post>,
    replies: Vec<Reply>,
    offline: bool,
}

/// In-memory implementation of the store client. Assigns ids and
/// timestamps the way the hosted platform's column defaults would.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the hosted platform being unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().offline = offline;
    }

    /// The raw replies collection, unsorted and ungrouped.
    pub fn raw_replies(&self) -> Vec<Reply> {
        self.inner.lock().replies.clone()
    }

    /// Insert a fully-specified row, bypassing store-assigned columns.
    pub fn seed_post(&self, post: Post) {
        self.inner.lock().posts.push(post);
    }

    /// Insert a fully-specified row, bypassing store-assigned columns.
    pub fn seed_reply(&self, reply: Reply) {
        self.inner.lock().replies.push(reply);
    }

    fn check_online(inner: &MemoryInner) -> Result<(), StoreError> {
        if inner.offline {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }
}

fn parse_ts(created_at: &str) -> (i64, u32) {
    DateTime::parse_from_rfc3339(created_at)
        .map(|ts| (ts.timestamp(), ts.timestamp_subsec_nanos()))
        .unwrap_or((0, 0))
}

#[async_trait]
impl ForumStore for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.lock();
        Self::check_online(&inner)?;
        let mut posts = inner.posts.clone();
        posts.sort_by(|a, b| parse_ts(&b.created_at).cmp(&parse_ts(&a.created_at)));
        Ok(posts)
    }

    async fn list_replies(&self) -> Result<Vec<Reply>, StoreError> {
        let inner = self.inner.lock();
        Self::check_online(&inner)?;
        let mut replies = inner.replies.clone();
        replies.sort_by(|a, b| parse_ts(&a.created_at).cmp(&parse_ts(&b.created_at)));
        Ok(replies)
    }

    async fn insert_post(&self, post: NewPost) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        Self::check_online(&inner)?;
        inner.posts.push(Post {
            id: uuid::Uuid::new_v4().to_string(),
            author_id: post.author_id,
            content: post.content,
            category: post.category,
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(())
    }

    async fn insert_reply(&self, reply: NewReply) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        Self::check_online(&inner)?;
        inner.replies.push(Reply {
            id: uuid::Uuid::new_v4().to_string(),
            post_id: reply.post_id,
            author_id: reply.author_id,
            content: reply.content,
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        Ok(())
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        Self::check_online(&inner)?;
        inner.posts.retain(|post| &post.id != id);
        Ok(())
    }

    async fn delete_reply(&self, id: &ReplyId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        Self::check_online(&inner)?;
        inner.replies.retain(|reply| &reply.id != id);
        Ok(())
    }
}
