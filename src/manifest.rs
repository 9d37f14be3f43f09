//! Extraction provenance, written to `manifest.json` at the store root.

use crate::model::Metadata;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Tag identifying the system journals are exported from.
pub const SOURCE_SYSTEM: &str = "legacy-xjs-system";

/// Version of the on-disk store format.
pub const FORMAT_VERSION: &str = "1.0.0";

/// Snapshot of one extraction run: when it ran, where the source lived,
/// and how many entities of each kind it produced.
///
/// Purely diagnostic; a load works without it (see
/// [`crate::store::Store::load_manifest`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub extracted_at: NaiveDateTime,
    pub source_system: String,
    pub source_path: String,
    pub entry_count: usize,
    pub person_count: usize,
    pub category_count: usize,
    pub attachment_count: usize,
    pub extractor_version: String,
}

impl Manifest {
    /// Builds a manifest for the given metadata at the given instant.
    #[must_use]
    pub fn snapshot(metadata: &Metadata, source_path: &str, extracted_at: NaiveDateTime) -> Self {
        Self {
            extracted_at,
            source_system: SOURCE_SYSTEM.to_owned(),
            source_path: source_path.to_owned(),
            entry_count: metadata.entries.len(),
            person_count: metadata.people.len(),
            category_count: metadata.categories.len(),
            attachment_count: metadata.attachments.len(),
            extractor_version: FORMAT_VERSION.to_owned(),
        }
    }
}
