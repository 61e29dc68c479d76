//! Posts, replies and board selection.

use chrono::Utc;
use tracing::{debug, info, warn};

use fb_core::{Board, ForumError, KeyValueStore, NewPost, NewReply, Post, Reply, Result, POSTS_KEY};

use crate::seed;
use crate::store::ForumStore;

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ForumError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl<S: KeyValueStore> ForumStore<S> {
    /// All posts, or only those on `board_topic`.
    ///
    /// The first call against an empty collection stores the example posts.
    pub fn fetch_posts(&mut self, board_topic: Option<&str>) -> Result<Vec<Post>> {
        if self.posts.is_empty() {
            let examples = seed::example_posts(Utc::now());
            self.write(POSTS_KEY, &examples)?;
            for post in &examples {
                self.ids.observe(post.id);
            }
            self.posts = examples;
            info!("seeded example posts");
        }

        let posts: Vec<Post> = match board_topic {
            Some(topic) => self
                .posts
                .iter()
                .filter(|p| p.board == topic)
                .cloned()
                .collect(),
            None => self.posts.clone(),
        };
        debug!(board = board_topic, count = posts.len(), "fetched posts");
        Ok(posts)
    }

    /// Stores a new post at the front of the collection (most recent first).
    pub fn create_post(&mut self, new: NewPost) -> Result<Post> {
        require("title", &new.title)?;
        require("content", &new.content)?;
        require("author", &new.author)?;
        if self.board_by_topic(&new.board).is_none() {
            warn!(board = %new.board, "post rejected: unknown board");
            return Err(ForumError::UnknownBoard(new.board));
        }

        let post = Post {
            id: self.ids.next_id()?,
            title: new.title,
            content: new.content,
            author: new.author,
            board: new.board,
            timestamp: Utc::now(),
            replies: Vec::new(),
        };

        let mut posts = Vec::with_capacity(self.posts.len() + 1);
        posts.push(post.clone());
        posts.extend(self.posts.iter().cloned());
        self.write(POSTS_KEY, &posts)?;
        self.posts = posts;

        info!(post_id = post.id, board = %post.board, "post created");
        Ok(post)
    }

    /// Appends a reply to the post with `post_id`.
    ///
    /// An unknown post id is an error and leaves every post untouched.
    pub fn add_reply(&mut self, post_id: i64, new: NewReply) -> Result<Reply> {
        require("content", &new.content)?;
        require("author", &new.author)?;
        let index = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or(ForumError::PostNotFound(post_id))?;

        let reply = Reply {
            id: self.ids.next_id()?,
            content: new.content,
            author: new.author,
            timestamp: Utc::now(),
        };

        let mut posts = self.posts.clone();
        posts[index].replies.push(reply.clone());
        self.write(POSTS_KEY, &posts)?;
        self.posts = posts;

        info!(post_id, reply_id = reply.id, "reply added");
        Ok(reply)
    }

    /// Makes `topic` the active board. In memory only.
    pub fn select_board(&mut self, topic: &str) -> Result<&Board> {
        let board = self
            .board_by_topic(topic)
            .cloned()
            .ok_or_else(|| ForumError::UnknownBoard(topic.to_string()))?;
        Ok(self.current_board.insert(board))
    }

    pub fn clear_board(&mut self) {
        self.current_board = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_storage_local::MemoryStorage;

    fn store() -> ForumStore<MemoryStorage> {
        ForumStore::load(MemoryStorage::new()).unwrap()
    }

    fn new_post(title: &str, board: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "body".to_string(),
            author: "alice".to_string(),
            board: board.to_string(),
        }
    }

    #[test]
    fn test_fetch_seeds_examples_once() {
        let mut store = store();
        let posts = store.fetch_posts(None).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Welcome to the Forum");
        assert_eq!(posts[1].author, "Moderator");

        store.create_post(new_post("mine", "tech")).unwrap();
        assert_eq!(store.fetch_posts(None).unwrap().len(), 3);
    }

    #[test]
    fn test_fetch_by_board_keeps_other_posts() {
        let mut store = store();
        store.create_post(new_post("a", "tech")).unwrap();
        store.create_post(new_post("b", "sports")).unwrap();

        let tech = store.fetch_posts(Some("tech")).unwrap();
        assert_eq!(tech.len(), 1);
        assert_eq!(store.all_posts().len(), 2);
        assert!(store.fetch_posts(Some("nowhere")).unwrap().is_empty());
    }

    #[test]
    fn test_create_post_rejects_unknown_board() {
        let mut store = store();
        let err = store.create_post(new_post("x", "politics")).unwrap_err();
        assert!(matches!(err, ForumError::UnknownBoard(topic) if topic == "politics"));
        assert!(store.all_posts().is_empty());
    }

    #[test]
    fn test_create_post_rejects_blank_title() {
        let mut store = store();
        let err = store.create_post(new_post("  ", "tech")).unwrap_err();
        assert!(matches!(err, ForumError::Validation(_)));
    }

    #[test]
    fn test_reply_ids_do_not_collide_with_post() {
        let mut store = store();
        let post = store.create_post(new_post("a", "general")).unwrap();
        let reply = store
            .add_reply(
                post.id,
                NewReply {
                    content: "hi".to_string(),
                    author: "bob".to_string(),
                },
            )
            .unwrap();
        assert!(reply.id > post.id);
        assert_eq!(store.get_post_by_id(post.id).unwrap().replies, vec![reply]);
    }

    #[test]
    fn test_select_board() {
        let mut store = store();
        assert_eq!(store.select_board("tech").unwrap().name, "Technology");
        assert_eq!(store.current_board().unwrap().topic, "tech");
        assert!(store.select_board("cooking").is_err());
        assert_eq!(store.current_board().unwrap().topic, "tech");
        store.clear_board();
        assert!(store.current_board().is_none());
    }
}
