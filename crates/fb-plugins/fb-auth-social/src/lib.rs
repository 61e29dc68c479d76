//! # fb-auth-social
//!
//! Thin adapter over an external `IdentityProvider` for social sign-in.
//! The adapter adds no validation or error translation: whatever the
//! provider raises reaches the caller unchanged.

mod local;

pub use local::LocalIdentityProvider;

use fb_core::models::{Account, ProviderKind};
use fb_core::traits::IdentityProvider;
use tracing::info;

pub struct SocialAuth<P: IdentityProvider> {
    provider: P,
}

impl<P: IdentityProvider> SocialAuth<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn sign_in(&self, kind: ProviderKind) -> anyhow::Result<Account> {
        let account = self.provider.sign_in_with_popup(kind).await?;
        info!(provider = %kind, uid = %account.uid, "signed in");
        Ok(account)
    }

    pub async fn sign_in_with_google(&self) -> anyhow::Result<Account> {
        self.sign_in(ProviderKind::Google).await
    }

    pub async fn sign_in_with_github(&self) -> anyhow::Result<Account> {
        self.sign_in(ProviderKind::Github).await
    }

    pub async fn sign_in_with_twitter(&self) -> anyhow::Result<Account> {
        self.sign_in(ProviderKind::Twitter).await
    }

    pub async fn sign_in_with_facebook(&self) -> anyhow::Result<Account> {
        self.sign_in(ProviderKind::Facebook).await
    }

    pub async fn sign_out(&self) -> anyhow::Result<()> {
        self.provider.sign_out().await?;
        info!("signed out");
        Ok(())
    }

    /// The account the provider currently considers active.
    pub fn current_account(&self) -> Option<Account> {
        self.provider.current_account()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::traits::MockIdentityProvider;
    use mockall::predicate::eq;

    fn account(kind: ProviderKind) -> Account {
        Account {
            uid: format!("{kind}-uid"),
            display_name: Some("Ada".to_string()),
            email: None,
            photo_url: None,
            provider: kind,
        }
    }

    #[tokio::test]
    async fn test_each_shortcut_requests_its_kind() {
        let mut provider = MockIdentityProvider::new();
        for kind in ProviderKind::ALL {
            provider
                .expect_sign_in_with_popup()
                .with(eq(kind))
                .times(1)
                .returning(|kind| Ok(account(kind)));
        }
        let auth = SocialAuth::new(provider);

        assert_eq!(auth.sign_in_with_google().await.unwrap().provider, ProviderKind::Google);
        assert_eq!(auth.sign_in_with_github().await.unwrap().provider, ProviderKind::Github);
        assert_eq!(auth.sign_in_with_twitter().await.unwrap().provider, ProviderKind::Twitter);
        assert_eq!(auth.sign_in_with_facebook().await.unwrap().provider, ProviderKind::Facebook);
    }

    #[tokio::test]
    async fn test_provider_error_passes_through() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_in_with_popup()
            .returning(|_| Err(anyhow::anyhow!("popup closed by user")));
        let auth = SocialAuth::new(provider);

        let err = auth.sign_in_with_google().await.unwrap_err();
        assert_eq!(err.to_string(), "popup closed by user");
    }

    #[tokio::test]
    async fn test_sign_out_and_current_account_delegate() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_sign_out().times(1).returning(|| Ok(()));
        provider.expect_current_account().returning(|| None);
        let auth = SocialAuth::new(provider);

        auth.sign_out().await.unwrap();
        assert!(auth.current_account().is_none());
    }
}
