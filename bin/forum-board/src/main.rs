//! # forum-board Binary
//!
//! The entry point that assembles the store, storage backend and identity
//! adapter from settings, then runs one command.

mod app;
mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use fb_config::{Settings, StorageBackend};
use fb_core::KeyValueStore;
use fb_storage_local::{FileStorage, MemoryStorage};
use fb_store::ForumStore;
use tracing::{debug, error};

use crate::app::App;
use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    logging::init_logging(&settings.logging);

    // Runtime choice of backend, so the store holds a boxed trait object.
    let storage: Box<dyn KeyValueStore> = match settings.storage.backend {
        StorageBackend::File => Box::new(FileStorage::open(&settings.storage.data_dir)?),
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
    };
    debug!(backend = ?settings.storage.backend, "storage ready");

    let store = ForumStore::load(storage)?;
    let mut app = App::new(store, settings.auth);

    match app.run(cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "command failed");
            Err(err)
        }
    }
}
