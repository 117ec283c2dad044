//! Feed synchronization: mutate against the remote store, then fully
//! reload.
//!
//! Consistency model: mutations are fire-and-forget against the store and
//! local state is reconciled only by the next full reload. No optimistic
//! updates, no incremental patching. Redundant transfer is acceptable at
//! this write volume and keeps the mirror from diverging.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    FeedError, NewPost, NewReply, Post, PostCategory, PostId, Reply, ReplyId, StoreError, UserId,
};
use crate::infra::store::ForumStore;

use super::grouping::group_replies;

/// Combined result of one full reload.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// All posts, newest first.
    pub posts: Vec<Post>,
    /// Replies keyed by parent post, oldest first. Posts without replies
    /// have no entry.
    pub replies_by_post: HashMap<PostId, Vec<Reply>>,
}

/// Entry points for loading the feed and issuing mutations.
///
/// The synchronizer holds no mirror state of its own; the reload after a
/// mutation is driven by the app shell.
pub struct FeedSynchronizer {
    store: Arc<dyn ForumStore>,
}

impl FeedSynchronizer {
    pub fn new(store: Arc<dyn ForumStore>) -> Self {
        Self { store }
    }

    /// Fetch all posts (newest first) and all replies (oldest first), then
    /// group the replies by parent post.
    pub async fn load_all(&self) -> Result<FeedSnapshot, StoreError> {
        let posts = self.store.list_posts().await?;
        let replies = self.store.list_replies().await?;
        Ok(FeedSnapshot {
            posts,
            replies_by_post: group_replies(replies),
        })
    }

    /// Insert a post with trimmed content. Content that trims to empty is
    /// rejected before any network call.
    pub async fn create_post(
        &self,
        author_id: UserId,
        content: &str,
        category: PostCategory,
    ) -> Result<(), FeedError> {
        let content = trimmed(content)?;
        self.store
            .insert_post(NewPost {
                author_id,
                content,
                category,
            })
            .await?;
        Ok(())
    }

    /// Insert a reply with trimmed content, tied to one post.
    pub async fn create_reply(
        &self,
        post_id: PostId,
        author_id: UserId,
        content: &str,
    ) -> Result<(), FeedError> {
        let content = trimmed(content)?;
        self.store
            .insert_reply(NewReply {
                post_id,
                author_id,
                content,
            })
            .await?;
        Ok(())
    }

    /// Delete-by-id, issued unconditionally; ownership is enforced by the
    /// store's row-level policy, not here. Replies to the deleted post are
    /// left in place.
    pub async fn delete_post(&self, post_id: &PostId) -> Result<(), StoreError> {
        self.store.delete_post(post_id).await
    }

    pub async fn delete_reply(&self, reply_id: &ReplyId) -> Result<(), StoreError> {
        self.store.delete_reply(reply_id).await
    }
}

fn trimmed(content: &str) -> Result<String, FeedError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(FeedError::EmptyContent);
    }
    Ok(trimmed.to_string())
}
