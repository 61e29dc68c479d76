//! Offline identity provider backed by pre-configured accounts.
//!
//! Stands in for a hosted provider during development and in tests: signing
//! in with a kind succeeds only if an account was registered for it.

use std::collections::HashMap;

use anyhow::bail;
use async_trait::async_trait;
use fb_core::models::{Account, ProviderKind};
use fb_core::traits::IdentityProvider;
use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub struct LocalIdentityProvider {
    accounts: HashMap<ProviderKind, Account>,
    active: Mutex<Option<Account>>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the account returned when signing in with `account.provider`.
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.insert(account.provider, account);
        self
    }

    pub fn configured_kinds(&self) -> Vec<ProviderKind> {
        let mut kinds: Vec<ProviderKind> = self.accounts.keys().copied().collect();
        kinds.sort();
        kinds
    }

    fn set_active(&self, account: Option<Account>) {
        *self.active.lock() = account;
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in_with_popup(&self, kind: ProviderKind) -> anyhow::Result<Account> {
        let Some(account) = self.accounts.get(&kind).cloned() else {
            bail!("no {kind} account is configured");
        };
        debug!(provider = %kind, uid = %account.uid, "local provider sign-in");
        self.set_active(Some(account.clone()));
        Ok(account)
    }

    async fn sign_out(&self) -> anyhow::Result<()> {
        self.set_active(None);
        Ok(())
    }

    fn current_account(&self) -> Option<Account> {
        self.active.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SocialAuth;

    fn github() -> Account {
        Account {
            uid: "gh-1".to_string(),
            display_name: Some("octocat".to_string()),
            email: Some("octo@example.com".to_string()),
            photo_url: None,
            provider: ProviderKind::Github,
        }
    }

    #[tokio::test]
    async fn test_sign_in_tracks_active_account() {
        let auth = SocialAuth::new(LocalIdentityProvider::new().with_account(github()));
        assert!(auth.current_account().is_none());

        let account = auth.sign_in_with_github().await.unwrap();
        assert_eq!(account, github());
        assert_eq!(auth.current_account(), Some(github()));

        auth.sign_out().await.unwrap();
        assert!(auth.current_account().is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_kind_fails_without_changing_active() {
        let auth = SocialAuth::new(LocalIdentityProvider::new().with_account(github()));
        auth.sign_in_with_github().await.unwrap();

        let err = auth.sign_in_with_twitter().await.unwrap_err();
        assert!(err.to_string().contains("twitter"));
        assert_eq!(auth.current_account(), Some(github()));
    }

    #[test]
    fn test_configured_kinds_sorted() {
        let provider = LocalIdentityProvider::new()
            .with_account(github())
            .with_account(Account {
                provider: ProviderKind::Google,
                ..github()
            });
        assert_eq!(
            provider.configured_kinds(),
            vec![ProviderKind::Google, ProviderKind::Github]
        );
    }
}
