//! # ForumStore
//!
//! The explicit context object holding all forum state. Every mutation is
//! written to the backend first and committed in memory only once the write
//! succeeds, so the two copies never drift apart on a failed write.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use fb_core::{
    Board, ForumError, IdGenerator, KeyValueStore, Post, Result, SessionUser, User,
    CURRENT_USER_KEY, POSTS_KEY, USERS_KEY,
};

use crate::password::Passwords;

pub struct ForumStore<S: KeyValueStore> {
    pub(crate) storage: S,
    pub(crate) users: Vec<User>,
    pub(crate) posts: Vec<Post>,
    pub(crate) session: Option<SessionUser>,
    pub(crate) boards: Vec<Board>,
    pub(crate) current_board: Option<Board>,
    pub(crate) ids: IdGenerator,
    pub(crate) passwords: Passwords,
}

/// Reads one key. Missing keys and `null` yield `None`; a value that does not
/// parse is discarded with a warning.
fn read_key<S, T>(storage: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get(key).map_err(ForumError::storage)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(key, error = %err, "discarding unreadable stored value");
            Ok(None)
        }
    }
}

impl<S: KeyValueStore> ForumStore<S> {
    /// Restores state from the backend.
    pub fn load(storage: S) -> Result<Self> {
        let users: Vec<User> = read_key(&storage, USERS_KEY)?.unwrap_or_default();
        let posts: Vec<Post> = read_key(&storage, POSTS_KEY)?.unwrap_or_default();
        let mut session: Option<SessionUser> = read_key(&storage, CURRENT_USER_KEY)?;

        if let Some(active) = &session {
            if !users.iter().any(|u| u.id == active.id) {
                warn!(user_id = active.id, "dropping session for unknown user");
                session = None;
            }
        }

        let ids = IdGenerator::seeded(
            users.iter().map(|u| u.id).chain(
                posts
                    .iter()
                    .flat_map(|p| std::iter::once(p.id).chain(p.replies.iter().map(|r| r.id))),
            ),
        );

        debug!(
            users = users.len(),
            posts = posts.len(),
            signed_in = session.is_some(),
            "forum state loaded"
        );

        Ok(Self {
            storage,
            users,
            posts,
            session,
            boards: Board::fixed_set(),
            current_board: None,
            ids,
            passwords: Passwords::default(),
        })
    }

    /// Replaces the password hasher (e.g. `Passwords::low_cost()` in tests).
    pub fn with_passwords(mut self, passwords: Passwords) -> Self {
        self.passwords = passwords;
        self
    }

    pub(crate) fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set(key, &raw).map_err(ForumError::storage)?;
        debug!(key, bytes = raw.len(), "persisted");
        Ok(())
    }

    // ── Getters ─────────────────────────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }

    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_post_by_id(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn all_boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board_by_topic(&self, topic: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.topic == topic)
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.current_board.as_ref()
    }

    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Hands the backend back, e.g. to reload from it.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
