//! Domain types for the Haven engine
//! Defines the core data structures and business objects used throughout the crate.

pub mod error;
pub mod post;
pub mod reply;
pub mod user;

pub use error::*;
pub use post::*;
pub use reply::*;
pub use user::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_display_parse() {
        assert_eq!(PostCategory::Academic.to_string(), "academic");
        assert_eq!(
            PostCategory::from_str("PERSONAL").unwrap(),
            PostCategory::Personal
        );
        assert_eq!(
            PostCategory::from_str("something else").unwrap(),
            PostCategory::General
        );
    }

    #[test]
    fn test_category_default_is_general() {
        assert_eq!(PostCategory::default(), PostCategory::General);
    }

    #[test]
    fn test_post_ownership() {
        let post = Post {
            id: "p1".into(),
            author_id: "u1".into(),
            content: "late-night worry".into(),
            category: PostCategory::General,
            created_at: "2026-08-01T10:00:00+00:00".into(),
        };
        assert!(post.is_authored_by(Some(&"u1".to_string())));
        assert!(!post.is_authored_by(Some(&"u2".to_string())));
        assert!(!post.is_authored_by(None));
    }
}
