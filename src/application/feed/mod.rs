//! Feed application logic: synchronization and view-model grouping.

pub mod grouping;
pub mod sync;

pub use grouping::{FeedEntry, ReplyEntry, feed_entries, group_replies, reply_entries};
pub use sync::{FeedSnapshot, FeedSynchronizer};
