//! # fb-store
//!
//! The forum state engine: members, posts, boards and the active session,
//! mirrored to a `KeyValueStore` on every mutation.
//!
//! ```no_run
//! # use fb_store::ForumStore;
//! # fn demo<S: fb_core::KeyValueStore>(backend: S) -> fb_core::Result<()> {
//! let mut store = ForumStore::load(backend)?;
//! store.register("alice", "wonderland")?;
//! let session = store.login("alice", "wonderland")?;
//! assert_eq!(session.name, "alice");
//! # Ok(())
//! # }
//! ```

mod accounts;
mod password;
mod posts;
mod profile;
mod seed;
mod store;

pub use password::Passwords;
pub use store::ForumStore;
