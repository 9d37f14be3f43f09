use super::{Error, Store, is_entry_file, is_hidden};
use crate::frontmatter;
use crate::manifest::Manifest;
use crate::model::{Attachment, Category, Entry, EntryRecord, Metadata, Person};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Everything one [`Store::load_all`] call reconstructed.
#[derive(Debug)]
pub struct LoadedStore {
    /// Entity maps rebuilt under synthetic IDs (display names and file
    /// names).
    pub metadata: Metadata,
    /// Entries in file-name order, relationships resolved, bodies attached.
    pub entries: Vec<Entry>,
    /// Number of entry files that were present but unusable.
    pub skipped: usize,
}

/// Why a single entry file was skipped. Never leaves the read path except
/// through a log line.
#[derive(Debug, thiserror::Error)]
enum EntryError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    FrontMatter(#[from] frontmatter::Error),

    #[error("missing or blank `id`")]
    MissingId,

    #[error("missing or unparsable `dateCreated`")]
    MissingDate,
}

impl Store {
    /// Loads the whole store back into memory.
    ///
    /// The layout is validated first, then every entry file is parsed in
    /// file-name order. A file that cannot be parsed is logged, counted in
    /// [`LoadedStore::skipped`] and skipped; people, categories and
    /// attachments are rebuilt from the names the surviving entries carry,
    /// first occurrence winning.
    ///
    /// # Errors
    /// Layout errors from [`Store::validate_layout`], or
    /// [`Error::NoUsableEntries`] when every entry file was skipped.
    #[tracing::instrument(skip(self), fields(root = %self.root().display()))]
    pub fn load_all(&self) -> Result<LoadedStore, Error> {
        self.validate_layout()?;

        if let Some(manifest) = self.load_manifest() {
            tracing::info!(
                source_system = %manifest.source_system,
                extracted_at = %manifest.extracted_at,
                entries = manifest.entry_count,
                "manifest found"
            );
        }

        let mut registry = SyntheticRegistry::default();
        let mut entries = Vec::new();
        let mut skipped = 0_usize;

        for path in self.entry_files() {
            match self.load_entry(&mut registry, &path) {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "skipping invalid entry markdown"
                    );
                    skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            return Err(Error::NoUsableEntries(self.entries_dir()));
        }

        let metadata = registry.into_metadata();
        tracing::info!(
            entries = entries.len(),
            people = metadata.people.len(),
            categories = metadata.categories.len(),
            attachments = metadata.attachments.len(),
            skipped,
            "store loaded"
        );

        Ok(LoadedStore {
            metadata,
            entries,
            skipped,
        })
    }

    /// Reads `manifest.json` when a readable one exists.
    ///
    /// The manifest is provenance, not data: an absent or corrupt one never
    /// blocks a load, so this returns `None` for both.
    #[must_use]
    pub fn load_manifest(&self) -> Option<Manifest> {
        let raw = fs::read_to_string(self.manifest_path()).ok()?;

        match serde_json::from_str(&raw) {
            Ok(manifest) => Some(manifest),
            Err(error) => {
                tracing::warn!(%error, "manifest exists but is unreadable");
                None
            }
        }
    }

    /// Entry files directly under `entries/`, in file-name order.
    fn entry_files(&self) -> Vec<PathBuf> {
        WalkDir::new(self.entries_dir())
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry))
            .filter_map(Result::ok)
            .filter(is_entry_file)
            .map(DirEntry::into_path)
            .collect()
    }

    fn load_entry(
        &self,
        registry: &mut SyntheticRegistry,
        path: &Path,
    ) -> Result<Entry, EntryError> {
        let raw = fs::read_to_string(path)?;
        let (header, body) = frontmatter::parse_entry(&raw)?;

        // Copied out while `header` is still whole; the moves below take it
        // apart field by field.
        let persons: Vec<String> = header.person_names().to_vec();
        let categories: Vec<String> = header.category_titles().to_vec();
        let attachment_names: Vec<String> = header.attachment_names().to_vec();

        let id = header
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(EntryError::MissingId)?;
        let created = header.created.ok_or(EntryError::MissingDate)?;

        for name in &persons {
            registry.register_person(name);
        }
        for title in &categories {
            registry.register_category(title);
        }
        let attachments: Vec<Attachment> = attachment_names
            .iter()
            .map(|name| registry.register_attachment(self.root(), name))
            .collect();

        let entry = Entry {
            id,
            title: header.title.unwrap_or_default(),
            created,
            body: body.to_owned(),
            persons,
            categories,
            attachments,
            location: header.location,
        };
        registry.register_entry(&entry);

        Ok(entry)
    }
}

/// Accumulates entities during a load, assigning synthetic IDs.
///
/// Serialization kept display names only, so the name itself becomes the
/// key: the first entry to mention a name defines the record, later
/// mentions reuse it.
#[derive(Debug, Default)]
struct SyntheticRegistry {
    metadata: Metadata,
}

impl SyntheticRegistry {
    fn register_person(&mut self, name: &str) {
        self.metadata
            .people
            .entry(name.to_owned())
            .or_insert_with(|| Person::from_display_name(name));
    }

    fn register_category(&mut self, title: &str) {
        self.metadata
            .categories
            .entry(title.to_owned())
            .or_insert_with(|| Category {
                id: title.to_owned(),
                title: title.to_owned(),
            });
    }

    fn register_attachment(&mut self, store_root: &Path, file_name: &str) -> Attachment {
        self.metadata
            .attachments
            .entry(file_name.to_owned())
            .or_insert_with(|| {
                let attachment = crate::attachment::resolve(store_root, file_name);
                if attachment.size.is_none() {
                    tracing::warn!(
                        file = file_name,
                        "referenced attachment file is missing from the store"
                    );
                }
                attachment
            })
            .clone()
    }

    fn register_entry(&mut self, entry: &Entry) {
        self.metadata.entries.insert(
            entry.id.clone(),
            EntryRecord {
                id: entry.id.clone(),
                title: entry.title.clone(),
                location: entry.location.clone(),
                created: entry.created,
                person_ids: entry.persons.clone(),
                category_ids: entry.categories.clone(),
                attachment_ids: entry
                    .attachments
                    .iter()
                    .map(|attachment| attachment.id.clone())
                    .collect(),
            },
        );
    }

    fn into_metadata(self) -> Metadata {
        self.metadata
    }
}
