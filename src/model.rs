//! Value types for the journal domain: people, categories, attachments,
//! entries and the [`Metadata`] aggregate tying them together.
//!
//! Two kinds of entry type exist on purpose. [`EntryRecord`] is the upstream
//! contract: relationships are opaque ID lists, exactly as the extraction
//! pass produces them. [`Entry`] is the downstream product of a store load:
//! relationships are resolved display names and fully derived
//! [`Attachment`] records, ready for rendering.

use chrono::NaiveDateTime;
use std::collections::HashMap;

/// A person referenced by journal entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
}

impl Person {
    /// Full display name: `"first last"`, with ` (nickname)` appended when a
    /// non-blank nickname is present.
    ///
    /// # Example
    /// ```
    /// use xjs_store::model::Person;
    ///
    /// let person = Person {
    ///     id: "p1".to_owned(),
    ///     first_name: "Jan".to_owned(),
    ///     last_name: "Novák".to_owned(),
    ///     nickname: Some("Honza".to_owned()),
    /// };
    /// assert_eq!(person.full_name(), "Jan Novák (Honza)");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        };

        match &self.nickname {
            Some(nickname) if !nickname.trim().is_empty() => format!("{name} ({nickname})"),
            _ => name,
        }
    }

    /// Rebuilds a person from a display name produced by [`Person::full_name`].
    ///
    /// Used on load, where the display name is all that survived
    /// serialization. The name itself becomes the synthetic ID, and the
    /// split is chosen so that `full_name()` of the result reproduces
    /// `name` exactly: a trailing parenthesized token is taken as the
    /// nickname, the last remaining word as the last name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Self {
        let (base, nickname) = match name
            .strip_suffix(')')
            .and_then(|stripped| stripped.rsplit_once(" ("))
        {
            Some((base, nickname)) => (base, Some(nickname.to_owned())),
            None => (name, None),
        };

        let (first_name, last_name) = match base.rsplit_once(' ') {
            Some((first, last)) => (first.to_owned(), last.to_owned()),
            None => (base.to_owned(), String::new()),
        };

        Self {
            id: name.to_owned(),
            first_name,
            last_name,
            nickname,
        }
    }
}

/// A category (free-text display label) entries can belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
}

/// A file attached to one or more entries.
///
/// The first four fields describe where the file came from; the remaining
/// ones are derived by [`crate::attachment::resolve`] against the files
/// actually present in the store and stay `None` until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: String,
    /// Absolute path of the file this attachment is read from.
    pub source_path: String,
    pub file_name: String,
    /// Location relative to the export (or store) root.
    pub location: String,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
    pub formatted_size: Option<String>,
}

impl Attachment {
    /// An attachment as the extraction pass describes it, before any of the
    /// derived fields are known.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        source_path: impl Into<String>,
        file_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_path: source_path.into(),
            file_name: file_name.into(),
            location: location.into(),
            extension: None,
            mime_type: None,
            size: None,
            formatted_size: None,
        }
    }
}

/// One journal entry as produced by the extraction pass, with relationships
/// still expressed as opaque ID lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: String,
    pub title: String,
    /// Original source-file location of the entry body, when known.
    pub location: Option<String>,
    pub created: NaiveDateTime,
    pub person_ids: Vec<String>,
    pub category_ids: Vec<String>,
    pub attachment_ids: Vec<String>,
}

/// One journal entry as reconstructed by a store load, with relationships
/// resolved to display names and derived attachment records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub created: NaiveDateTime,
    /// HTML fragment; empty when the entry had no body.
    pub body: String,
    pub persons: Vec<String>,
    pub categories: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub location: Option<String>,
}

/// Aggregate of the four entity maps, each keyed by ID.
///
/// On the write side the keys are the durable IDs assigned by the source
/// system. After a load they are synthetic: display names for people and
/// categories, file names for attachments (see the crate docs on identity
/// collapse).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub people: HashMap<String, Person>,
    pub categories: HashMap<String, Category>,
    pub attachments: HashMap<String, Attachment>,
    pub entries: HashMap<String, EntryRecord>,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::Person;

    fn person(first: &str, last: &str, nickname: Option<&str>) -> Person {
        Person {
            id: "p1".to_owned(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            nickname: nickname.map(str::to_owned),
        }
    }

    #[test]
    fn full_name_without_nickname() {
        assert_eq!(person("Jana", "Nováková", None).full_name(), "Jana Nováková");
    }

    #[test]
    fn full_name_with_nickname() {
        assert_eq!(
            person("Jan", "Novák", Some("Honza")).full_name(),
            "Jan Novák (Honza)"
        );
    }

    #[test]
    fn full_name_ignores_blank_nickname() {
        assert_eq!(person("Jan", "Novák", Some("  ")).full_name(), "Jan Novák");
    }

    #[test]
    fn full_name_single_name() {
        assert_eq!(person("Madonna", "", None).full_name(), "Madonna");
    }

    #[test]
    fn display_name_round_trips() {
        for name in [
            "Jana Nováková",
            "Jan Novák (Honza)",
            "Madonna",
            "Anna Marie van der Berg",
            "legacy-person-id-123",
            "X (nick))",
        ] {
            let rebuilt = Person::from_display_name(name);
            assert_eq!(rebuilt.full_name(), name, "failed for {name:?}");
            assert_eq!(rebuilt.id, name);
        }
    }

    #[test]
    fn display_name_splits_fields() {
        let person = Person::from_display_name("Jan Novák (Honza)");

        assert_eq!(person.first_name, "Jan");
        assert_eq!(person.last_name, "Novák");
        assert_eq!(person.nickname.as_deref(), Some("Honza"));
    }
}
