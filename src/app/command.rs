use crate::domain::{PostCategory, PostId, ReplyId, UserId};

/// Why a feed reload was requested; used for log lines only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRefreshReason {
    Initial,
    Manual,
    AfterPostCreate,
    AfterReplyCreate,
    AfterPostDelete,
    AfterReplyDelete,
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadFeed {
        reason: FeedRefreshReason,
    },
    CreatePost {
        author_id: UserId,
        content: String,
        category: PostCategory,
    },
    CreateReply {
        post_id: PostId,
        author_id: UserId,
        content: String,
    },
    DeletePost {
        post_id: PostId,
    },
    DeleteReply {
        reply_id: ReplyId,
    },
    SignOut,
}
