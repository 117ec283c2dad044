//! Executes commands against the synchronizer and channels completions
//! back into the action loop.

use crate::domain::{PostCategory, PostId, ReplyId, UserId};

use super::FeedApp;
use super::action::AsyncAction;
use super::command::{Command, FeedRefreshReason};

pub fn run(app: &mut FeedApp, command: Command) {
    match command {
        Command::LoadFeed { reason } => load_feed(app, reason),
        Command::CreatePost {
            author_id,
            content,
            category,
        } => create_post(app, author_id, content, category),
        Command::CreateReply {
            post_id,
            author_id,
            content,
        } => create_reply(app, post_id, author_id, content),
        Command::DeletePost { post_id } => delete_post(app, post_id),
        Command::DeleteReply { reply_id } => delete_reply(app, reply_id),
        Command::SignOut => sign_out(app),
    }
}

fn load_feed(app: &mut FeedApp, reason: FeedRefreshReason) {
    log::debug!("Reloading feed: {reason:?}");
    let sync = app.synchronizer.clone();
    let tx = app.tx.clone();
    app.handle.spawn(async move {
        let result = sync.load_all().await.map_err(|e| e.to_string());
        let _ = tx.send(AsyncAction::FeedLoaded(result));
    });
}

fn create_post(app: &mut FeedApp, author_id: UserId, content: String, category: PostCategory) {
    let sync = app.synchronizer.clone();
    let tx = app.tx.clone();
    app.handle.spawn(async move {
        let result = sync
            .create_post(author_id, &content, category)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(AsyncAction::PostCreated(result));
    });
}

fn create_reply(app: &mut FeedApp, post_id: PostId, author_id: UserId, content: String) {
    let sync = app.synchronizer.clone();
    let tx = app.tx.clone();
    app.handle.spawn(async move {
        let result = sync
            .create_reply(post_id, author_id, &content)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(AsyncAction::ReplyCreated(result));
    });
}

fn delete_post(app: &mut FeedApp, post_id: PostId) {
    let sync = app.synchronizer.clone();
    let tx = app.tx.clone();
    app.handle.spawn(async move {
        let result = sync.delete_post(&post_id).await.map_err(|e| e.to_string());
        let _ = tx.send(AsyncAction::PostDeleted(result));
    });
}

fn delete_reply(app: &mut FeedApp, reply_id: ReplyId) {
    let sync = app.synchronizer.clone();
    let tx = app.tx.clone();
    app.handle.spawn(async move {
        let result = sync.delete_reply(&reply_id).await.map_err(|e| e.to_string());
        let _ = tx.send(AsyncAction::ReplyDeleted(result));
    });
}

fn sign_out(app: &mut FeedApp) {
    let session = app.session.clone();
    let tx = app.tx.clone();
    app.handle.spawn(async move {
        let result = session.sign_out().await.map_err(|e| e.to_string());
        let _ = tx.send(AsyncAction::SignedOut(result));
    });
}
