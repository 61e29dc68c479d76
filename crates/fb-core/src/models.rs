//! # Domain Models
//!
//! These structs represent the core entities of forum-board.
//! JSON field names follow the persisted layout (camelCase, optional
//! fields omitted), so a stored `forum_users` array reads back unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered forum member.
///
/// `password` holds an Argon2 PHC string for accounts created by this crate.
/// Older data may carry a plaintext value, which is upgraded on next login.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Projection used as session data. Never carries the password.
    pub fn sanitized(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.username.clone(),
            join_date: self.join_date,
            bio: self.bio.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("join_date", &self.join_date)
            .finish_non_exhaustive()
    }
}

/// The currently authenticated member, as seen by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    /// Display name, mirrors `User::username`
    pub name: String,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Fields a member may change on their profile. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
}

/// A top-level discussion entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Topic of the board this post lives on (e.g. "tech")
    pub board: String,
    pub timestamp: DateTime<Utc>,
    /// Kept in arrival order
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied part of a post; id, timestamp and replies are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub board: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReply {
    pub content: String,
    pub author: String,
}

/// A fixed topical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub name: String,
    /// The URL slug (e.g. "tech" for /board/tech)
    pub topic: String,
}

impl Board {
    fn new(id: u32, name: &str, topic: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            topic: topic.to_string(),
        }
    }

    /// The closed set of boards. Never mutated at runtime.
    pub fn fixed_set() -> Vec<Board> {
        vec![
            Board::new(1, "General Discussion", "general"),
            Board::new(2, "Technology", "tech"),
            Board::new(3, "Entertainment", "entertainment"),
            Board::new(4, "Sports", "sports"),
        ]
    }
}

/// Social identity providers the auth adapter can delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Github,
    Twitter,
    Facebook,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Google,
        ProviderKind::Github,
        ProviderKind::Twitter,
        ProviderKind::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Github => "github",
            ProviderKind::Twitter => "twitter",
            ProviderKind::Facebook => "facebook",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown identity provider '{s}'"))
    }
}

/// The principal an identity provider considers signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub provider: ProviderKind,
}
