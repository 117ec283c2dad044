use std::collections::HashMap;

use crate::domain::{Post, PostId, Reply, UserId};

/// One renderable feed row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry<'a> {
    pub post: &'a Post,
    /// Replies for this post, oldest first; empty when the post has none.
    pub replies: &'a [Reply],
    /// Display affordance for the delete button only; authorization lives
    /// in the store's row-level policy.
    pub is_owner: bool,
}

/// One renderable row in the replies panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyEntry<'a> {
    pub reply: &'a Reply,
    pub is_owner: bool,
}

/// Bucket replies by parent post, preserving input order within each
/// bucket. Keys exist only for posts with at least one reply.
pub fn group_replies(replies: Vec<Reply>) -> HashMap<PostId, Vec<Reply>> {
    let mut grouped: HashMap<PostId, Vec<Reply>> = HashMap::new();
    for reply in replies {
        grouped.entry(reply.post_id.clone()).or_default().push(reply);
    }
    grouped
}

/// Pure projection of the mirror into renderable rows; an absent reply
/// bucket reads as an empty slice.
pub fn feed_entries<'a>(
    posts: &'a [Post],
    replies_by_post: &'a HashMap<PostId, Vec<Reply>>,
    current_user: Option<&UserId>,
) -> Vec<FeedEntry<'a>> {
    posts
        .iter()
        .map(|post| FeedEntry {
            post,
            replies: replies_by_post
                .get(&post.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            is_owner: post.is_authored_by(current_user),
        })
        .collect()
}

pub fn reply_entries<'a>(
    replies: &'a [Reply],
    current_user: Option<&UserId>,
) -> Vec<ReplyEntry<'a>> {
    replies
        .iter()
        .map(|reply| ReplyEntry {
            reply,
            is_owner: reply.is_authored_by(current_user),
        })
        .collect()
}
