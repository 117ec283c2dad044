use std::collections::HashMap;

use crate::application::feed::{FeedEntry, feed_entries};
use crate::domain::{Post, PostCategory, PostId, Reply, UserId};

/// Which single overlay (if any) is visible. One discriminated value, so
/// at-most-one-overlay holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    CreatePost,
    Replies(PostId),
    ReplyForm(PostId),
}

/// Draft for the create-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub content: String,
    pub category: PostCategory,
}

/// All engine state in one struct. The feed mirror is written only when a
/// reload completion is applied; everything else is local UI state.
#[derive(Default)]
pub struct AppState {
    /// Signed-in user, read from the session provider at startup.
    pub current_user: Option<UserId>,

    /// In-memory mirror of the posts collection, newest first.
    pub posts: Vec<Post>,
    /// Mirror of the replies collection, grouped by parent post, oldest
    /// first within each bucket.
    pub replies_by_post: HashMap<PostId, Vec<Reply>>,

    pub overlay: Overlay,
    pub post_draft: PostDraft,
    pub reply_draft: String,

    pub is_loading: bool,
    pub is_submitting: bool,
    pub feed_error: Option<String>,
}

impl AppState {
    pub fn post(&self, post_id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == post_id)
    }

    /// Replies for one post; an absent key reads as empty.
    pub fn replies_for(&self, post_id: &PostId) -> &[Reply] {
        self.replies_by_post
            .get(post_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Renderable feed rows with ownership affordances for the current
    /// user.
    pub fn entries(&self) -> Vec<FeedEntry<'_>> {
        feed_entries(&self.posts, &self.replies_by_post, self.current_user.as_ref())
    }
}
