//! The intermediate store: one directory holding everything a single
//! extraction produced, in a layout meant to be read by humans first and
//! programs second.
//!
//! ```text
//! <root>/
//!   entries/*.md          one front-matter markdown file per entry
//!   metadata/             legacy, optional on read
//!   attachments/<name>    verbatim copies of attachment files
//!   manifest.json         extraction provenance
//! ```
//!
//! Writing denormalizes: relationship IDs are resolved to display names
//! before they hit disk. Reading reconstructs entity maps from those names,
//! so the IDs a load returns are synthetic (the names themselves).
//!
//! # Examples
//! ```no_run
//! use xjs_store::prelude::*;
//!
//! let store = Store::new("/exports/journal-store");
//! let loaded = store.load_all().unwrap();
//!
//! println!(
//!     "{} entries, {} people, {} skipped files",
//!     loaded.entries.len(),
//!     loaded.metadata.people.len(),
//!     loaded.skipped,
//! );
//! ```

mod store_read;
mod store_validate;
mod store_write;

pub use store_read::LoadedStore;
pub use store_write::{AttachmentCopy, CopyOutcome, CopySummary};

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::DirEntry;

/// Subdirectory holding one markdown file per entry.
pub const ENTRIES_DIR: &str = "entries";
/// Legacy subdirectory; optional on read, created when absent.
pub const METADATA_DIR: &str = "metadata";
/// Subdirectory attachment files are copied into.
pub const ATTACHMENTS_DIR: &str = "attachments";
/// File name of the provenance manifest at the store root.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum Error {
    /// The store root itself is missing.
    #[error("intermediate store directory does not exist: `{0}`")]
    MissingRoot(PathBuf),

    /// The root exists but has no `entries` subdirectory.
    #[error("entries directory does not exist: `{0}`")]
    MissingEntriesDir(PathBuf),

    /// The `entries` subdirectory holds no entry files at all.
    #[error("no entry files found in: `{0}`")]
    NoEntryFiles(PathBuf),

    /// Every entry file in the store failed to parse.
    #[error("no entries could be loaded successfully from: `{0}`")]
    NoUsableEntries(PathBuf),

    /// I/O failure outside the per-file tolerance (directory creation,
    /// entry write, manifest write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest could not be serialized.
    #[error("manifest serialization failed: {0}")]
    ManifestJson(#[from] serde_json::Error),
}

/// Handle to one intermediate store rooted at a directory.
///
/// Creating the handle touches nothing on disk; every operation validates
/// or creates what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn entries_dir(&self) -> PathBuf {
        self.root.join(ENTRIES_DIR)
    }

    #[must_use]
    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    #[must_use]
    pub fn attachments_dir(&self) -> PathBuf {
        self.root.join(ATTACHMENTS_DIR)
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

pub(crate) fn is_entry_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Wall-clock timestamp in the zone-less form the store writes.
pub(crate) fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
