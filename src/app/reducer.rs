//! Pure state transitions. Overlay orchestration and submit validation
//! live here; side effects are returned as commands.

use super::action::{Action, AsyncAction, FeedAction, OverlayAction};
use super::command::{Command, FeedRefreshReason};
use super::state::{AppState, Overlay, PostDraft};

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Feed(action) => reduce_feed(state, action),
        Action::Overlay(action) => reduce_overlay(state, action),
        Action::Async(action) => reduce_async(state, action),
    }
}

fn reduce_feed(state: &mut AppState, action: FeedAction) -> Vec<Command> {
    match action {
        FeedAction::Refresh => {
            state.is_loading = true;
            vec![Command::LoadFeed {
                reason: FeedRefreshReason::Manual,
            }]
        }
        FeedAction::SetPostDraft(content) => {
            state.post_draft.content = content;
            Vec::new()
        }
        FeedAction::SetPostCategory(category) => {
            state.post_draft.category = category;
            Vec::new()
        }
        FeedAction::SetReplyDraft(content) => {
            state.reply_draft = content;
            Vec::new()
        }
        FeedAction::SubmitPost => {
            // A blank draft behaves like a disabled submit control.
            if state.post_draft.content.trim().is_empty() {
                return Vec::new();
            }
            let Some(author_id) = state.current_user.clone() else {
                return Vec::new();
            };
            state.is_submitting = true;
            vec![Command::CreatePost {
                author_id,
                content: state.post_draft.content.clone(),
                category: state.post_draft.category,
            }]
        }
        FeedAction::SubmitReply => {
            let Overlay::ReplyForm(post_id) = &state.overlay else {
                return Vec::new();
            };
            if state.reply_draft.trim().is_empty() {
                return Vec::new();
            }
            let Some(author_id) = state.current_user.clone() else {
                return Vec::new();
            };
            let post_id = post_id.clone();
            state.is_submitting = true;
            vec![Command::CreateReply {
                post_id,
                author_id,
                content: state.reply_draft.clone(),
            }]
        }
        // No client-side ownership check; the store's row-level policy is
        // the authorization boundary.
        FeedAction::DeletePost(post_id) => {
            vec![Command::DeletePost { post_id }]
        }
        FeedAction::DeleteReply(reply_id) => {
            vec![Command::DeleteReply { reply_id }]
        }
        FeedAction::SignOut => vec![Command::SignOut],
    }
}

fn reduce_overlay(state: &mut AppState, action: OverlayAction) -> Vec<Command> {
    match action {
        OverlayAction::OpenCreatePost => {
            state.overlay = Overlay::CreatePost;
        }
        OverlayAction::OpenReplies(post_id) => {
            state.overlay = Overlay::Replies(post_id);
        }
        OverlayAction::OpenReplyForm(post_id) => {
            state.overlay = Overlay::ReplyForm(post_id);
            state.reply_draft.clear();
        }
        OverlayAction::Close => {
            state.overlay = Overlay::Closed;
        }
    }
    Vec::new()
}

fn reduce_async(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::FeedLoaded(result) => {
            state.is_loading = false;
            match result {
                Ok(snapshot) => {
                    // Last completion to drain wins; stale reload responses
                    // are not dropped.
                    state.posts = snapshot.posts;
                    state.replies_by_post = snapshot.replies_by_post;
                    state.feed_error = None;
                }
                Err(err) => {
                    // Prior mirror is retained untouched.
                    state.feed_error = Some(err);
                }
            }
            Vec::new()
        }
        AsyncAction::PostCreated(result) => {
            state.is_submitting = false;
            match result {
                Ok(()) => {
                    if state.overlay == Overlay::CreatePost {
                        state.overlay = Overlay::Closed;
                    }
                    state.post_draft = PostDraft::default();
                    state.feed_error = None;
                    state.is_loading = true;
                    vec![Command::LoadFeed {
                        reason: FeedRefreshReason::AfterPostCreate,
                    }]
                }
                Err(err) => {
                    // The modal stays open with the draft intact.
                    state.feed_error = Some(err);
                    Vec::new()
                }
            }
        }
        AsyncAction::ReplyCreated(result) => {
            state.is_submitting = false;
            match result {
                Ok(()) => {
                    if matches!(state.overlay, Overlay::ReplyForm(_)) {
                        state.overlay = Overlay::Closed;
                    }
                    state.reply_draft.clear();
                    state.feed_error = None;
                    state.is_loading = true;
                    vec![Command::LoadFeed {
                        reason: FeedRefreshReason::AfterReplyCreate,
                    }]
                }
                Err(err) => {
                    state.feed_error = Some(err);
                    Vec::new()
                }
            }
        }
        AsyncAction::PostDeleted(result) => {
            if let Err(err) = result {
                state.feed_error = Some(err);
            }
            // The reload runs whether or not the delete matched a row.
            state.is_loading = true;
            vec![Command::LoadFeed {
                reason: FeedRefreshReason::AfterPostDelete,
            }]
        }
        AsyncAction::ReplyDeleted(result) => {
            if let Err(err) = result {
                state.feed_error = Some(err);
            }
            // The replies panel stays open and re-renders from the reload.
            state.is_loading = true;
            vec![Command::LoadFeed {
                reason: FeedRefreshReason::AfterReplyDelete,
            }]
        }
        AsyncAction::SignedOut(result) => {
            match result {
                Ok(()) => {
                    state.current_user = None;
                }
                Err(err) => {
                    log::warn!("Sign out failed: {err}");
                }
            }
            Vec::new()
        }
    }
}
