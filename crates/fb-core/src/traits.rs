//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::models::{Account, ProviderKind};

/// Durable key-value storage, the analogue of browser local storage.
///
/// Writes are synchronous and blocking. Each call touches one key; there is
/// no grouping across keys.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KeyValueStore: Send {
    /// Returns `None` when the key has never been written.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

/// External identity provider contract (social sign-in).
///
/// Token storage, refresh and verification belong to the provider.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Interactive sign-in with the given provider kind.
    async fn sign_in_with_popup(&self, kind: ProviderKind) -> anyhow::Result<Account>;

    async fn sign_out(&self) -> anyhow::Result<()>;

    /// Whichever account the provider currently considers active.
    fn current_account(&self) -> Option<Account>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        (**self).remove(key)
    }
}
