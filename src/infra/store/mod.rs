//! Remote store client (infrastructure).
//!
//! The hosted data platform owns the schema, query execution, and
//! row-level security; this module is a thin pass-through over its two
//! collections, `posts` and `replies`.

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestForumStore;

use crate::domain::{NewPost, NewReply, Post, PostId, Reply, ReplyId, StoreError};
use async_trait::async_trait;

/// Pass-through operations against the hosted `posts` and `replies`
/// collections.
#[async_trait]
pub trait ForumStore: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// All replies, oldest first.
    async fn list_replies(&self) -> Result<Vec<Reply>, StoreError>;

    async fn insert_post(&self, post: NewPost) -> Result<(), StoreError>;

    async fn insert_reply(&self, reply: NewReply) -> Result<(), StoreError>;

    /// Delete-by-id. An id that matches no row is not an error; the store
    /// reports how many rows matched and the client does not inspect it.
    async fn delete_post(&self, id: &PostId) -> Result<(), StoreError>;

    async fn delete_reply(&self, id: &ReplyId) -> Result<(), StoreError>;
}
