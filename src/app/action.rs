use crate::application::feed::FeedSnapshot;
use crate::domain::{PostCategory, PostId, ReplyId};

#[derive(Debug)]
pub enum Action {
    Feed(FeedAction),
    Overlay(OverlayAction),
    Async(AsyncAction),
}

/// User intents against the feed.
#[derive(Debug)]
pub enum FeedAction {
    Refresh,
    SetPostDraft(String),
    SetPostCategory(PostCategory),
    SetReplyDraft(String),
    SubmitPost,
    SubmitReply,
    DeletePost(PostId),
    DeleteReply(ReplyId),
    SignOut,
}

/// Overlay open/close intents.
#[derive(Debug)]
pub enum OverlayAction {
    OpenCreatePost,
    OpenReplies(PostId),
    OpenReplyForm(PostId),
    Close,
}

/// Completions arriving from spawned store calls.
#[derive(Debug)]
pub enum AsyncAction {
    FeedLoaded(Result<FeedSnapshot, String>),
    PostCreated(Result<(), String>),
    ReplyCreated(Result<(), String>),
    PostDeleted(Result<(), String>),
    ReplyDeleted(Result<(), String>),
    SignedOut(Result<(), String>),
}
