//! forum-board/crates/fb-core/src/lib.rs
//!
//! The central domain types and interface definitions for forum-board.

pub mod error;
pub mod ids;
pub mod models;
pub mod routes;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use ids::*;
pub use models::*;
pub use routes::*;
pub use traits::*;

/// Durable key holding the JSON array of users.
pub const USERS_KEY: &str = "forum_users";
/// Durable key holding the JSON array of posts.
pub const POSTS_KEY: &str = "forum_posts";
/// Durable key holding the session user, or `null`.
pub const CURRENT_USER_KEY: &str = "forum_current_user";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 1_700_000_000_000,
            username: "alice".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            join_date: Utc::now(),
            bio: Some("hello".to_string()),
            location: None,
            website: None,
            avatar: None,
        }
    }

    #[test]
    fn test_sanitized_user_drops_password() {
        let session = sample_user().sanitized();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["name"], "alice");
        assert_eq!(json["bio"], "hello");
        assert!(json.get("password").is_none());
        assert!(json.get("location").is_none());
        assert!(json.get("joinDate").is_some());
    }

    #[test]
    fn test_user_debug_hides_password() {
        let rendered = format!("{:?}", sample_user());
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("argon2"));
    }

    #[test]
    fn test_post_without_replies_field_deserializes() {
        let raw = r#"{"id":1,"title":"t","content":"c","author":"a","board":"general","timestamp":"2024-01-01T00:00:00.000Z"}"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert!(post.replies.is_empty());
    }

    #[test]
    fn test_fixed_board_set() {
        let boards = Board::fixed_set();
        let topics: Vec<&str> = boards.iter().map(|b| b.topic.as_str()).collect();
        assert_eq!(topics, ["general", "tech", "entertainment", "sports"]);
    }

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("GitHub".parse::<ProviderKind>().unwrap(), ProviderKind::Github);
        assert!("myspace".parse::<ProviderKind>().is_err());
        assert_eq!(serde_json::to_string(&ProviderKind::Twitter).unwrap(), "\"twitter\"");
    }

    #[test]
    fn test_id_generator_never_repeats_within_a_tick() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000).unwrap();
        let b = ids.next_at(1_000).unwrap();
        let c = ids.next_at(999).unwrap();
        assert_eq!((a, b, c), (1_000, 1_001, 1_002));
        assert_eq!(ids.next_at(5_000).unwrap(), 5_000);
    }

    #[test]
    fn test_id_generator_seeded_above_existing() {
        let mut ids = IdGenerator::seeded([3, 42, 7]);
        assert_eq!(ids.next_at(10).unwrap(), 43);
    }

    #[test]
    fn test_id_generator_exhausted_at_max() {
        let mut ids = IdGenerator::seeded([i64::MAX]);
        assert!(matches!(ids.next_at(1_000), Err(ForumError::Storage(_))));
        assert!(matches!(ids.next_id(), Err(ForumError::Storage(_))));

        let mut ids = IdGenerator::seeded([i64::MAX - 1]);
        assert_eq!(ids.next_at(1_000).unwrap(), i64::MAX);
        assert!(ids.next_at(1_000).is_err());
    }

    #[test]
    fn test_route_round_trip() {
        for route in [
            Route::Home,
            Route::Posts,
            Route::PostDetail(17),
            Route::Profile,
            Route::Board("tech".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse("/posts/"), Some(Route::Posts));
        assert_eq!(Route::parse("/posts/abc"), None);
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("posts"), None);
    }
}
