//! Rendering the front-matter block of one entry file.

use super::{
    DATE_FORMAT, KEY_ATTACHMENT_IDS, KEY_ATTACHMENTS, KEY_CATEGORIES, KEY_DATE_CREATED,
    KEY_EXTRACTED_AT, KEY_ID, KEY_LOCATION, KEY_PERSONS, KEY_SOURCE, KEY_TITLE,
    quoted::{join_quoted, quote},
};
use chrono::NaiveDateTime;
use std::fmt;

/// Everything needed to render one entry file: denormalized relationship
/// lists, provenance, and an optional body.
///
/// The write path builds this after resolving the entry's ID lists against
/// the metadata maps; `to_string()` yields the exact file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDocument<'a> {
    pub id: &'a str,
    pub title: &'a str,
    /// Written only when present and non-blank.
    pub location: Option<&'a str>,
    pub created: NaiveDateTime,
    pub persons: &'a [String],
    pub categories: &'a [String],
    pub attachments: &'a [String],
    /// Legacy parallel field kept alongside `attachments` for older readers.
    pub attachment_ids: &'a [String],
    pub source: &'a str,
    pub extracted_at: NaiveDateTime,
    pub body: Option<&'a str>,
}

impl fmt::Display for EntryDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "{KEY_ID}: {}", quote(self.id))?;
        writeln!(f, "{KEY_TITLE}: {}", quote(self.title))?;
        writeln!(f, "{KEY_DATE_CREATED}: {}", self.created.format(DATE_FORMAT))?;

        if let Some(location) = self.location.filter(|value| !value.trim().is_empty()) {
            writeln!(f, "{KEY_LOCATION}: {}", quote(location))?;
        }

        writeln!(f, "{KEY_PERSONS}: {}", join_quoted(self.persons))?;
        writeln!(f, "{KEY_CATEGORIES}: {}", join_quoted(self.categories))?;
        writeln!(f, "{KEY_ATTACHMENTS}: {}", join_quoted(self.attachments))?;
        writeln!(f, "{KEY_ATTACHMENT_IDS}: {}", join_quoted(self.attachment_ids))?;
        writeln!(f, "{KEY_SOURCE}: {}", quote(self.source))?;
        writeln!(f, "{KEY_EXTRACTED_AT}: {}", self.extracted_at.format(DATE_FORMAT))?;
        writeln!(f, "---")?;
        writeln!(f)?;

        if let Some(body) = self.body {
            f.write_str(body)?;
            if !body.ends_with('\n') {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
