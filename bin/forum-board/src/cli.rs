//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fb_core::ProviderKind;

#[derive(Parser, Debug)]
#[command(name = "forum-board", version, about = "Local forum: members, boards, posts and replies")]
pub struct Cli {
    /// Settings file (TOML); missing files fall back to defaults
    #[arg(long, env = "FORUM_CONFIG", default_value = fb_config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a member account
    Register { username: String, password: String },
    /// Start a session
    Login { username: String, password: String },
    Logout,
    /// Show the signed-in member
    Whoami,
    /// List members (without passwords)
    Users,
    /// List the fixed boards
    Boards,
    /// List posts, optionally for one board topic
    Posts {
        #[arg(long)]
        board: Option<String>,
    },
    /// Show one post with its replies
    Show { id: i64 },
    /// Create a post; the author defaults to the signed-in member
    Post(PostArgs),
    /// Reply to a post; the author defaults to the signed-in member
    Reply(ReplyArgs),
    /// Edit the signed-in member's profile
    Profile(ProfileArgs),
    /// Sign in with a social identity provider
    Signin { provider: ProviderKind },
    /// Sign out of the social identity provider
    Signout,
    /// Show the account the identity provider considers active
    Account,
    /// Resolve a UI path to its route
    Route { path: String },
}

#[derive(Args, Debug)]
pub struct PostArgs {
    #[arg(long)]
    pub board: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub author: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReplyArgs {
    pub post_id: i64,
    #[arg(long)]
    pub content: String,
    #[arg(long)]
    pub author: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}
