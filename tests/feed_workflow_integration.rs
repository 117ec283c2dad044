//! Integration tests for the feed workflow
//! These tests verify that the application engine and store adapters work together correctly

use std::sync::Arc;

use haven::app::{Action, FeedAction, FeedApp, Overlay, OverlayAction};
use haven::application::feed::{FeedSynchronizer, feed_entries};
use haven::domain::{AuthUser, PostCategory};
use haven::infra::session::StaticSession;
use haven::infra::store::MemoryStore;

fn app_for(store: Arc<MemoryStore>, user: &str) -> FeedApp {
    let synchronizer = Arc::new(FeedSynchronizer::new(store));
    let session = Arc::new(StaticSession::signed_in(AuthUser::new(user)));
    FeedApp::new(synchronizer, session)
}

async fn settle(app: &mut FeedApp) {
    for _ in 0..2 {
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        app.poll_messages();
    }
}

#[tokio::test]
async fn test_full_feed_workflow_across_two_users() {
    // Two sessions against one shared store: A posts, B replies, each
    // sees ownership affordances only on their own rows.
    let store = Arc::new(MemoryStore::new());
    let mut app_a = app_for(store.clone(), "user-a");
    let mut app_b = app_for(store.clone(), "user-b");

    app_a.start();
    app_b.start();
    settle(&mut app_a).await;
    settle(&mut app_b).await;

    app_a.dispatch(Action::Overlay(OverlayAction::OpenCreatePost));
    app_a.dispatch(Action::Feed(FeedAction::SetPostDraft(
        "finals stress".into(),
    )));
    app_a.dispatch(Action::Feed(FeedAction::SetPostCategory(
        PostCategory::Academic,
    )));
    app_a.dispatch(Action::Feed(FeedAction::SubmitPost));
    settle(&mut app_a).await;

    assert_eq!(app_a.state.posts.len(), 1);
    let post_id = app_a.state.posts[0].id.clone();
    assert!(app_a.state.entries()[0].is_owner);

    // B refreshes, sees the post without the delete affordance, replies.
    app_b.dispatch(Action::Feed(FeedAction::Refresh));
    settle(&mut app_b).await;
    assert_eq!(app_b.state.posts.len(), 1);
    assert!(!app_b.state.entries()[0].is_owner);

    app_b.dispatch(Action::Overlay(OverlayAction::OpenReplyForm(
        post_id.clone(),
    )));
    app_b.dispatch(Action::Feed(FeedAction::SetReplyDraft(
        "you've got this".into(),
    )));
    app_b.dispatch(Action::Feed(FeedAction::SubmitReply));
    settle(&mut app_b).await;

    assert_eq!(app_b.state.overlay, Overlay::Closed);
    assert_eq!(app_b.state.replies_for(&post_id).len(), 1);
    assert!(
        app_b.state.replies_for(&post_id)[0].is_authored_by(Some(&"user-b".to_string())),
        "reply belongs to user-b"
    );

    // A refreshes and sees one reply it cannot delete.
    app_a.dispatch(Action::Feed(FeedAction::Refresh));
    settle(&mut app_a).await;
    let replies = app_a.state.replies_for(&post_id);
    assert_eq!(replies.len(), 1);
    assert!(!replies[0].is_authored_by(app_a.state.current_user.as_ref()));
}

#[tokio::test]
async fn test_post_delete_leaves_reply_unreachable() {
    let store = Arc::new(MemoryStore::new());
    let mut app = app_for(store.clone(), "user-a");
    app.start();
    settle(&mut app).await;

    app.dispatch(Action::Feed(FeedAction::SetPostDraft("anyone else?".into())));
    app.dispatch(Action::Feed(FeedAction::SubmitPost));
    settle(&mut app).await;
    let post_id = app.state.posts[0].id.clone();

    app.dispatch(Action::Overlay(OverlayAction::OpenReplyForm(
        post_id.clone(),
    )));
    app.dispatch(Action::Feed(FeedAction::SetReplyDraft("same here".into())));
    app.dispatch(Action::Feed(FeedAction::SubmitReply));
    settle(&mut app).await;

    app.dispatch(Action::Feed(FeedAction::DeletePost(post_id.clone())));
    settle(&mut app).await;

    // The post is gone from the feed; its reply survives as a dead row in
    // the raw collection but is unreachable through the view model.
    assert!(app.state.posts.is_empty());
    assert_eq!(store.raw_replies().len(), 1);
    assert!(
        feed_entries(
            &app.state.posts,
            &app.state.replies_by_post,
            app.state.current_user.as_ref()
        )
        .is_empty()
    );
}

#[tokio::test]
async fn test_feed_orders_newest_post_first() {
    let store = Arc::new(MemoryStore::new());
    let mut app = app_for(store.clone(), "user-a");
    app.start();
    settle(&mut app).await;

    app.dispatch(Action::Feed(FeedAction::SetPostDraft("first".into())));
    app.dispatch(Action::Feed(FeedAction::SubmitPost));
    settle(&mut app).await;

    app.dispatch(Action::Feed(FeedAction::SetPostDraft("second".into())));
    app.dispatch(Action::Feed(FeedAction::SubmitPost));
    settle(&mut app).await;

    assert_eq!(app.state.posts.len(), 2);
    assert_eq!(app.state.posts[0].content, "second");
    assert_eq!(app.state.posts[1].content, "first");
}
