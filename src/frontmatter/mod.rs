//! The bespoke front-matter codec entry files are written in.
//!
//! Each entry file starts with a `---` delimited block of `key: value`
//! lines followed by the HTML body. The format looks like YAML but is not:
//! it has exactly two value shapes (quoted scalar, bracketed list of quoted
//! scalars) with its own escaping rules, so it gets its own small encoder
//! and parser instead of a serialization library.
//!
//! ```text
//! ---
//! id: "entry-1"
//! title: "First day"
//! dateCreated: 2006-04-15T10:30:00
//! persons: ["Jan Novák (Honza)"]
//! categories: ["Travel"]
//! attachments: ["scan.pdf"]
//! attachmentIds: ["att-9"]
//! source: "legacy-xjs-system"
//! extractedAt: 2026-08-22T12:00:00
//! ---
//!
//! <p>body</p>
//! ```
//!
//! Relationship lists exist in two generations: the name-based keys
//! (`persons`, `categories`, `attachments`) written today, and the ID-based
//! keys (`personIds`, `categoryIds`, `attachmentIds`) older files carry.
//! [`EntryHeader`] keeps both and the accessors apply the preference rule.

pub mod encode;
pub mod parser;
pub mod quoted;

mod decode;

pub use decode::parse_entry;
pub use encode::EntryDocument;
pub use parser::Error;

use chrono::NaiveDateTime;

pub(crate) const KEY_ID: &str = "id";
pub(crate) const KEY_TITLE: &str = "title";
pub(crate) const KEY_DATE_CREATED: &str = "dateCreated";
pub(crate) const KEY_LOCATION: &str = "location";
pub(crate) const KEY_PERSONS: &str = "persons";
pub(crate) const KEY_CATEGORIES: &str = "categories";
pub(crate) const KEY_ATTACHMENTS: &str = "attachments";
pub(crate) const KEY_PERSON_IDS: &str = "personIds";
pub(crate) const KEY_CATEGORY_IDS: &str = "categoryIds";
pub(crate) const KEY_ATTACHMENT_IDS: &str = "attachmentIds";
pub(crate) const KEY_SOURCE: &str = "source";
pub(crate) const KEY_EXTRACTED_AT: &str = "extractedAt";

/// Wire format of `dateCreated` and `extractedAt`: ISO-8601 date-time, no
/// zone suffix, written unquoted.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decoded front matter of one entry file.
///
/// Every field is optional or defaultable: the decoder never fails on
/// missing keys, it is the store's read path that decides which fields a
/// usable entry requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryHeader {
    pub id: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub created: Option<NaiveDateTime>,
    pub persons: Vec<String>,
    pub categories: Vec<String>,
    pub attachments: Vec<String>,
    pub person_ids: Vec<String>,
    pub category_ids: Vec<String>,
    pub attachment_ids: Vec<String>,
}

impl EntryHeader {
    /// Person display names, falling back to the legacy ID list when the
    /// name-based list is absent or empty.
    #[must_use]
    pub fn person_names(&self) -> &[String] {
        if self.persons.is_empty() {
            &self.person_ids
        } else {
            &self.persons
        }
    }

    /// Category titles, with the same legacy fallback as
    /// [`EntryHeader::person_names`].
    #[must_use]
    pub fn category_titles(&self) -> &[String] {
        if self.categories.is_empty() {
            &self.category_ids
        } else {
            &self.categories
        }
    }

    /// Attachment file names, with the same legacy fallback as
    /// [`EntryHeader::person_names`].
    #[must_use]
    pub fn attachment_names(&self) -> &[String] {
        if self.attachments.is_empty() {
            &self.attachment_ids
        } else {
            &self.attachments
        }
    }
}
