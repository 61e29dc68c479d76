//! Example content shown on a fresh install.

use chrono::{DateTime, Utc};
use fb_core::Post;

fn example(id: i64, title: &str, content: &str, author: &str, now: DateTime<Utc>) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        board: "general".to_string(),
        timestamp: now,
        replies: Vec::new(),
    }
}

pub(crate) fn example_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        example(1, "Welcome to the Forum", "This is our first post!", "Admin", now),
        example(2, "How to use the forum", "Here are some tips...", "Moderator", now),
    ]
}
