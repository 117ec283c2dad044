use serde::{Deserialize, Serialize};

use crate::domain::{PostId, UserId};

/// Unique identifier for a reply
pub type ReplyId = String;

/// An anonymous reply to a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    /// Unique identifier for the reply, assigned by the store.
    pub id: ReplyId,
    /// Parent post. A reply whose post was deleted stays in the store but
    /// is never displayed.
    pub post_id: PostId,
    /// Creating user. Never rendered to other users; ownership checks only.
    pub author_id: UserId,
    /// Reply body, trimmed before insert.
    pub content: String,
    /// Creation timestamp in RFC3339 format, assigned by the store.
    pub created_at: String,
}

impl Reply {
    pub fn is_authored_by(&self, user: Option<&UserId>) -> bool {
        user.is_some_and(|id| id == &self.author_id)
    }
}

/// Insert payload for a reply; `id` and `created_at` are store defaults.
#[derive(Debug, Clone, Serialize)]
pub struct NewReply {
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
}
