//! All prelude

pub use crate::manifest::Manifest;
pub use crate::model::{Attachment, Category, Entry, EntryRecord, Metadata, Person};
pub use crate::store::{LoadedStore, Store};
pub use crate::store::{AttachmentCopy, CopyOutcome, CopySummary};
