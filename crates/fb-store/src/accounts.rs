//! Registration, login and profile actions.

use chrono::Utc;
use tracing::{info, warn};

use fb_core::{
    ForumError, KeyValueStore, ProfileUpdate, Result, SessionUser, User, CURRENT_USER_KEY,
    USERS_KEY,
};

use crate::password::Passwords;
use crate::profile;
use crate::store::ForumStore;

impl<S: KeyValueStore> ForumStore<S> {
    fn username_taken(&self, username: &str, except: Option<i64>) -> bool {
        self.users
            .iter()
            .any(|u| u.username == username && Some(u.id) != except)
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ForumError::Validation("username must not be empty".into()));
        }
        if password.is_empty() {
            return Err(ForumError::Validation("password must not be empty".into()));
        }
        if self.username_taken(username, None) {
            warn!(username, "registration rejected: username taken");
            return Err(ForumError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: self.ids.next_id()?,
            username: username.to_string(),
            password: self.passwords.hash(password)?,
            join_date: Utc::now(),
            bio: None,
            location: None,
            website: None,
            avatar: None,
        };
        let user_id = user.id;

        let mut users = self.users.clone();
        users.push(user);
        self.write(USERS_KEY, &users)?;
        self.users = users;

        info!(user_id, username, "registered user");
        Ok(())
    }

    /// Starts a session for the matching member and returns its sanitized view.
    ///
    /// The username must match exactly; no trimming or case folding.
    pub fn login(&mut self, username: &str, password: &str) -> Result<SessionUser> {
        let Some(index) = self
            .users
            .iter()
            .position(|u| u.username == username && self.passwords.verify(&u.password, password))
        else {
            warn!(username, "login rejected");
            return Err(ForumError::InvalidCredentials);
        };

        if !Passwords::is_hashed(&self.users[index].password) {
            self.upgrade_legacy_password(index, password);
        }

        let session = self.users[index].sanitized();
        self.write(CURRENT_USER_KEY, &session)?;
        self.session = Some(session.clone());

        info!(user_id = session.id, username, "user logged in");
        Ok(session)
    }

    /// Replaces a plaintext password with its hash. Failure keeps the old value.
    fn upgrade_legacy_password(&mut self, index: usize, password: &str) {
        let upgraded = self.passwords.hash(password).and_then(|hash| {
            let mut users = self.users.clone();
            users[index].password = hash;
            self.write(USERS_KEY, &users)?;
            self.users = users;
            Ok(())
        });
        match upgraded {
            Ok(()) => info!(user_id = self.users[index].id, "upgraded legacy password"),
            Err(err) => warn!(error = %err, "could not upgrade legacy password"),
        }
    }

    pub fn logout(&mut self) -> Result<()> {
        self.write(CURRENT_USER_KEY, &None::<SessionUser>)?;
        if let Some(previous) = self.session.take() {
            info!(user_id = previous.id, "user logged out");
        }
        Ok(())
    }

    /// Merges the allow-listed fields of `updates` into the member's record.
    ///
    /// When the member is the one signed in, the session's display fields
    /// follow the merged record.
    pub fn update_profile(&mut self, user_id: i64, updates: ProfileUpdate) -> Result<()> {
        if let Some(name) = profile::requested_username(&updates) {
            if self.username_taken(&name, Some(user_id)) {
                warn!(user_id, username = %name, "profile update rejected: username taken");
                return Err(ForumError::DuplicateUsername(name));
            }
        }

        let index = self
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(ForumError::UserNotFound(user_id))?;

        let mut users = self.users.clone();
        profile::apply(&mut users[index], &updates);
        let refreshed = self
            .session
            .as_ref()
            .filter(|s| s.id == user_id)
            .map(|s| profile::refresh_session(s, &users[index]));

        self.write(USERS_KEY, &users)?;
        if let Some(refreshed) = &refreshed {
            if let Err(err) = self.write(CURRENT_USER_KEY, refreshed) {
                self.restore_users();
                return Err(err);
            }
        }

        self.users = users;
        if refreshed.is_some() {
            self.session = refreshed;
        }
        info!(user_id, "profile updated");
        Ok(())
    }

    /// Puts the committed user list back into storage after a partial write.
    fn restore_users(&mut self) {
        let previous = self.users.clone();
        if let Err(err) = self.write(USERS_KEY, &previous) {
            warn!(error = %err, "could not restore stored users");
        }
    }
}
