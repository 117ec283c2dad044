use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::UserId;

/// Unique identifier for a post
pub type PostId = String;

/// A post in the anonymous feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Unique identifier for the post, assigned by the store.
    pub id: PostId,
    /// Creating user. Never rendered to other users; ownership checks only.
    pub author_id: UserId,
    /// Post body. Trimmed before insert; not re-validated after a store
    /// round-trip.
    pub content: String,
    /// Category pill shown on the card.
    #[serde(default)]
    pub category: PostCategory,
    /// Creation timestamp in RFC3339 format, assigned by the store.
    pub created_at: String,
}

impl Post {
    pub fn is_authored_by(&self, user: Option<&UserId>) -> bool {
        user.is_some_and(|id| id == &self.author_id)
    }
}

/// Category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    Academic,
    Personal,
    /// Catch-all; unknown strings from the store decode as this variant.
    #[default]
    #[serde(other)]
    General,
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Academic => write!(f, "academic"),
            Self::Personal => write!(f, "personal"),
            Self::General => write!(f, "general"),
        }
    }
}

impl FromStr for PostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACADEMIC" => Ok(Self::Academic),
            "PERSONAL" => Ok(Self::Personal),
            _ => Ok(Self::General),
        }
    }
}

/// Insert payload for a post; `id` and `created_at` are store defaults.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub author_id: UserId,
    pub content: String,
    pub category: PostCategory,
}
