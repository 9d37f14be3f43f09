//! `xjs-store` - Human-readable intermediate store for legacy XJS journal exports
//!
//! Sits between two halves of a journal migration:
//! - An extraction pass turns the legacy XML export into [`model::Metadata`]
//!   and hands it to [`store::Store`] to write out
//! - A rendering pass calls [`store::Store::load_all`] to get resolved
//!   entries back for HTML generation
//!
//! ## Key Features
//! * 📖 **Readable at rest**: One front-matter markdown file per entry,
//!   meaningful even if this tooling is never run again
//! * 🔁 **Round-trip safe**: Titles and names with quotes, backslashes and
//!   commas survive write and load unchanged
//! * 🛡️ **Tolerant loading**: A corrupt entry file is skipped and counted,
//!   never fatal on its own
//! * 📎 **Attachment aware**: Files are copied next to the entries and
//!   re-derived with MIME type and size on load
//!
//! ## Usage
//! Add to `Cargo.toml`:
//! ```toml
//! [dependencies]
//! xjs-store = "0.1"
//! ```
//!
//! ## Examples
//!
//! ### Writing a store
//! ```no_run
//! use xjs_store::prelude::*;
//! use chrono::NaiveDateTime;
//!
//! let store = Store::new("/exports/journal-store");
//! let metadata = Metadata::new(); // produced by the extraction pass
//!
//! let record = EntryRecord {
//!     id: "entry-1".to_owned(),
//!     title: "First day".to_owned(),
//!     location: None,
//!     created: NaiveDateTime::parse_from_str("2006-04-15T10:30:00", "%Y-%m-%dT%H:%M:%S")
//!         .unwrap(),
//!     person_ids: Vec::new(),
//!     category_ids: Vec::new(),
//!     attachment_ids: Vec::new(),
//! };
//!
//! store.save_entry(&metadata, &record, Some("<p>Hello</p>")).unwrap();
//! store.copy_attachments(&metadata).unwrap();
//! store.save_manifest(&metadata, "/exports/journal").unwrap();
//! ```
//!
//! ### Loading it back
//! ```no_run
//! use xjs_store::prelude::*;
//!
//! tracing_subscriber::fmt::init();
//!
//! let store = Store::new("/exports/journal-store");
//! let loaded = store.load_all().unwrap();
//!
//! for entry in &loaded.entries {
//!     println!(
//!         "{} {} ({} attachments)",
//!         entry.created,
//!         entry.title,
//!         entry.attachments.len()
//!     );
//! }
//! println!("skipped {} unreadable files", loaded.skipped);
//! ```
//!
//! ## On-disk format
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
//! The block looks like YAML but is deliberately not: see [`frontmatter`]
//! for the two value shapes and the escaping rules.

//#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::panic)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::as_conversions)]

pub mod attachment;
pub mod frontmatter;
pub mod manifest;
pub mod model;
pub mod prelude;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
