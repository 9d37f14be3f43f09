use super::{Error, Store, local_now};
use crate::frontmatter::EntryDocument;
use crate::manifest::{Manifest, SOURCE_SYSTEM};
use crate::model::{EntryRecord, Metadata, Person};
use std::fs;
use std::path::{Path, PathBuf};

/// Longest title prefix that participates in an entry file name.
const TITLE_SLUG_MAX: usize = 100;

/// Outcome of one attachment copy attempt.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied { bytes: u64 },
    MissingSource,
    Failed(std::io::Error),
}

/// One attachment's copy result.
#[derive(Debug)]
pub struct AttachmentCopy {
    pub file_name: String,
    pub outcome: CopyOutcome,
}

/// Aggregated result of a best-effort attachment copy pass.
///
/// The pass itself never fails; callers that care inspect the per-file
/// outcomes or the counts.
#[derive(Debug, Default)]
pub struct CopySummary {
    results: Vec<AttachmentCopy>,
}

impl CopySummary {
    #[must_use]
    pub fn results(&self) -> &[AttachmentCopy] {
        &self.results
    }

    #[must_use]
    pub fn copied(&self) -> usize {
        self.count(|outcome| matches!(outcome, CopyOutcome::Copied { .. }))
    }

    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(|outcome| matches!(outcome, CopyOutcome::MissingSource))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, CopyOutcome::Failed(_)))
    }

    /// `true` when every attachment was copied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.copied() == self.results.len()
    }

    fn count(&self, matcher: impl Fn(&CopyOutcome) -> bool) -> usize {
        self.results
            .iter()
            .filter(|result| matcher(&result.outcome))
            .count()
    }
}

impl Store {
    /// Serializes one entry into `entries/`, creating the directory when
    /// needed, and returns the path written.
    ///
    /// The record's ID lists are resolved against `metadata` into display
    /// names; IDs with no match are silently dropped (a dangling reference
    /// is not an error at write time). Attachments keep a legacy parallel
    /// ID list in the file for older readers. An existing file of the same
    /// name is replaced.
    ///
    /// # Errors
    /// [`Error::Io`] when the directory or file cannot be written.
    #[tracing::instrument(skip_all, fields(entry_id = %record.id))]
    pub fn save_entry(
        &self,
        metadata: &Metadata,
        record: &EntryRecord,
        body: Option<&str>,
    ) -> Result<PathBuf, Error> {
        let entries_dir = self.entries_dir();
        fs::create_dir_all(&entries_dir)?;

        let persons: Vec<String> = record
            .person_ids
            .iter()
            .filter_map(|id| metadata.people.get(id))
            .map(Person::full_name)
            .collect();
        let categories: Vec<String> = record
            .category_ids
            .iter()
            .filter_map(|id| metadata.categories.get(id))
            .map(|category| category.title.clone())
            .collect();
        let attachments: Vec<String> = record
            .attachment_ids
            .iter()
            .filter_map(|id| metadata.attachments.get(id))
            .map(|attachment| attachment.file_name.clone())
            .collect();

        let document = EntryDocument {
            id: &record.id,
            title: &record.title,
            location: record.location.as_deref(),
            created: record.created,
            persons: &persons,
            categories: &categories,
            attachments: &attachments,
            attachment_ids: &record.attachment_ids,
            source: SOURCE_SYSTEM,
            extracted_at: local_now(),
            body,
        };

        let path = entries_dir.join(entry_file_name(record));
        fs::write(&path, document.to_string())?;
        tracing::debug!(path = %path.display(), "entry written");

        Ok(path)
    }

    /// Copies every attachment in the metadata into `attachments/`,
    /// overwriting same-named files.
    ///
    /// Individual copies are best-effort: a missing source or a failed copy
    /// is logged, recorded in the summary and never aborts the pass.
    ///
    /// # Errors
    /// [`Error::Io`] only when the `attachments/` directory itself cannot
    /// be created.
    #[tracing::instrument(skip_all, fields(root = %self.root().display()))]
    pub fn copy_attachments(&self, metadata: &Metadata) -> Result<CopySummary, Error> {
        let target_dir = self.attachments_dir();
        fs::create_dir_all(&target_dir)?;

        let mut results = Vec::with_capacity(metadata.attachments.len());
        for attachment in metadata.attachments.values() {
            let source = Path::new(&attachment.source_path);
            let outcome = if source.is_file() {
                match fs::copy(source, target_dir.join(&attachment.file_name)) {
                    Ok(bytes) => CopyOutcome::Copied { bytes },
                    Err(error) => {
                        tracing::warn!(
                            file = %attachment.file_name,
                            %error,
                            "attachment copy failed"
                        );
                        CopyOutcome::Failed(error)
                    }
                }
            } else {
                tracing::warn!(
                    path = %attachment.source_path,
                    "attachment source file does not exist"
                );
                CopyOutcome::MissingSource
            };

            results.push(AttachmentCopy {
                file_name: attachment.file_name.clone(),
                outcome,
            });
        }

        let summary = CopySummary { results };
        tracing::info!(
            copied = summary.copied(),
            missing = summary.missing(),
            failed = summary.failed(),
            "attachment copy finished"
        );

        Ok(summary)
    }

    /// Writes `manifest.json` at the store root, replacing any previous
    /// one.
    ///
    /// # Errors
    /// [`Error::Io`] or [`Error::ManifestJson`].
    #[tracing::instrument(skip_all, fields(root = %self.root().display()))]
    pub fn save_manifest(&self, metadata: &Metadata, source_path: &str) -> Result<(), Error> {
        fs::create_dir_all(self.root())?;

        let manifest = Manifest::snapshot(metadata, source_path, local_now());
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.manifest_path(), json)?;

        tracing::info!(entries = manifest.entry_count, "manifest written");
        Ok(())
    }
}

/// File name for an entry: slug of `{ISO timestamp}_{title}` plus the
/// markdown extension. The title contributes at most its first
/// 100 characters.
pub(crate) fn entry_file_name(record: &EntryRecord) -> String {
    let timestamp = record.created.format(crate::frontmatter::DATE_FORMAT);
    let title: String = record.title.chars().take(TITLE_SLUG_MAX).collect();

    format!("{}.md", slugify(&format!("{timestamp}_{title}")))
}

/// Lower-cases and collapses every run of non-alphanumeric characters into
/// a single underscore, trimming underscores at both ends.
fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
