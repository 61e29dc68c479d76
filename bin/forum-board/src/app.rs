//! Wires a `ForumStore` (and, with `auth-social`, the identity adapter) to
//! CLI commands. Every command renders its result as text for stdout.

use anyhow::{anyhow, bail, Context};
use fb_core::{KeyValueStore, NewPost, NewReply, ProfileUpdate, Route};
use fb_store::ForumStore;
use serde::Serialize;
use serde_json::json;

#[cfg(feature = "auth-social")]
use fb_auth_social::{LocalIdentityProvider, SocialAuth};
use fb_config::AuthSettings;

use crate::cli::{Command, PostArgs, ProfileArgs, ReplyArgs};

pub struct App<S: KeyValueStore> {
    pub store: ForumStore<S>,
    pub auth_settings: AuthSettings,
    #[cfg(feature = "auth-social")]
    pub auth: SocialAuth<LocalIdentityProvider>,
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to render output")
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: ForumStore<S>, auth_settings: AuthSettings) -> Self {
        #[cfg(feature = "auth-social")]
        let auth = {
            let provider = auth_settings
                .accounts
                .iter()
                .fold(LocalIdentityProvider::new(), |provider, (kind, account)| {
                    provider.with_account(account.to_account(*kind))
                });
            SocialAuth::new(provider)
        };

        Self {
            store,
            auth_settings,
            #[cfg(feature = "auth-social")]
            auth,
        }
    }

    /// The explicit author, or the signed-in member's name.
    fn author_or_session(&self, author: Option<String>) -> anyhow::Result<String> {
        author
            .or_else(|| self.store.current_user().map(|u| u.name.clone()))
            .ok_or_else(|| anyhow!("log in or pass --author"))
    }

    pub async fn run(&mut self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::Register { username, password } => {
                self.store.register(&username, &password)?;
                Ok(format!("registered {}", username.trim()))
            }
            Command::Login { username, password } => {
                let session = self.store.login(&username, &password)?;
                pretty(&session)
            }
            Command::Logout => {
                self.store.logout()?;
                Ok("logged out".to_string())
            }
            Command::Whoami => match self.store.current_user() {
                Some(user) => pretty(user),
                None => Ok("not logged in".to_string()),
            },
            Command::Users => {
                let users: Vec<_> = self.store.all_users().iter().map(|u| u.sanitized()).collect();
                pretty(&users)
            }
            Command::Boards => pretty(self.store.all_boards()),
            Command::Posts { board } => {
                if let Some(topic) = &board {
                    self.store.select_board(topic)?;
                }
                let posts = self.store.fetch_posts(board.as_deref())?;
                pretty(&posts)
            }
            Command::Show { id } => match self.store.get_post_by_id(id) {
                Some(post) => pretty(post),
                None => bail!("post {id} not found"),
            },
            Command::Post(PostArgs {
                board,
                title,
                content,
                author,
            }) => {
                let author = self.author_or_session(author)?;
                let post = self.store.create_post(NewPost {
                    title,
                    content,
                    author,
                    board,
                })?;
                pretty(&post)
            }
            Command::Reply(ReplyArgs {
                post_id,
                content,
                author,
            }) => {
                let author = self.author_or_session(author)?;
                let reply = self.store.add_reply(post_id, NewReply { content, author })?;
                pretty(&reply)
            }
            Command::Profile(args) => self.update_profile(args),
            Command::Signin { provider } => self.sign_in(provider).await,
            Command::Signout => self.sign_out().await,
            Command::Account => self.current_account(),
            Command::Route { path } => match Route::parse(&path) {
                Some(route) => pretty(&json!({ "name": route.name(), "path": route.path() })),
                None => bail!("no route matches {path}"),
            },
        }
    }

    fn update_profile(&mut self, args: ProfileArgs) -> anyhow::Result<String> {
        let user_id = self
            .store
            .current_user()
            .map(|u| u.id)
            .ok_or_else(|| anyhow!("log in to edit your profile"))?;
        self.store.update_profile(
            user_id,
            ProfileUpdate {
                username: args.username,
                bio: args.bio,
                location: args.location,
                website: args.website,
                avatar: args.avatar,
            },
        )?;
        match self.store.current_user() {
            Some(user) => pretty(user),
            None => Ok("profile updated".to_string()),
        }
    }

    #[cfg(feature = "auth-social")]
    async fn sign_in(&mut self, kind: fb_core::ProviderKind) -> anyhow::Result<String> {
        if !self.auth_settings.is_enabled(kind) {
            bail!("{kind} sign-in is not enabled");
        }
        let account = self.auth.sign_in(kind).await?;
        pretty(&account)
    }

    #[cfg(feature = "auth-social")]
    async fn sign_out(&mut self) -> anyhow::Result<String> {
        self.auth.sign_out().await?;
        Ok("signed out".to_string())
    }

    /// Provider state lives in this process only, so a fresh run reports no account.
    #[cfg(feature = "auth-social")]
    fn current_account(&self) -> anyhow::Result<String> {
        match self.auth.current_account() {
            Some(account) => pretty(&account),
            None => Ok("no account signed in".to_string()),
        }
    }

    #[cfg(not(feature = "auth-social"))]
    fn current_account(&self) -> anyhow::Result<String> {
        bail!("account lookup requires the auth-social feature")
    }

    #[cfg(not(feature = "auth-social"))]
    async fn sign_in(&mut self, kind: fb_core::ProviderKind) -> anyhow::Result<String> {
        bail!("{kind} sign-in requires the auth-social feature")
    }

    #[cfg(not(feature = "auth-social"))]
    async fn sign_out(&mut self) -> anyhow::Result<String> {
        bail!("sign-out requires the auth-social feature")
    }
}
