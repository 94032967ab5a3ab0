//! Storage and manifest adapters: read rule lists, persist universe memory,
//! parse passenger manifests.
//!
//! This crate is allowed to do filesystem IO. It does not classify anything;
//! that is the domain crate's job.

#![forbid(unsafe_code)]

mod file;
mod manifest;

use camino::Utf8Path;
use customs_domain::store::ItemStore;
use customs_types::StorageProvider;

pub use file::FileItemStore;
pub use manifest::{ManifestError, parse_manifest, parse_record, read_manifest};

/// Open the store selected by configuration.
pub fn open_store(provider: StorageProvider, dir: &Utf8Path) -> anyhow::Result<Box<dyn ItemStore>> {
    let store: Box<dyn ItemStore> = match provider {
        StorageProvider::FileItem => Box::new(FileItemStore::new(dir)),
    };
    tracing::debug!(%provider, dir = %dir, "storage provider opened");
    Ok(store)
}
