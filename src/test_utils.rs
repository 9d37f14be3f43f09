use crate::model::{Attachment, Category, EntryRecord, Metadata, Person};
use chrono::NaiveDateTime;

pub(crate) fn date(iso: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// Two people, two categories, one attachment, no entries.
pub(crate) fn sample_metadata() -> Metadata {
    let mut metadata = Metadata::new();

    metadata.people.insert(
        "p1".to_owned(),
        Person {
            id: "p1".to_owned(),
            first_name: "Jan".to_owned(),
            last_name: "Novák".to_owned(),
            nickname: Some("Honza".to_owned()),
        },
    );
    metadata.people.insert(
        "p2".to_owned(),
        Person {
            id: "p2".to_owned(),
            first_name: "Jana".to_owned(),
            last_name: "Nováková".to_owned(),
            nickname: None,
        },
    );

    metadata.categories.insert(
        "c1".to_owned(),
        Category {
            id: "c1".to_owned(),
            title: "Travel".to_owned(),
        },
    );
    metadata.categories.insert(
        "c2".to_owned(),
        Category {
            id: "c2".to_owned(),
            title: "Family".to_owned(),
        },
    );

    metadata.attachments.insert(
        "a1".to_owned(),
        Attachment::new(
            "a1",
            "/exports/journal/Attachments/scan.pdf",
            "scan.pdf",
            "scan.pdf",
        ),
    );

    metadata
}

pub(crate) fn sample_record(id: &str, title: &str, created: &str) -> EntryRecord {
    EntryRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        location: None,
        created: date(created),
        person_ids: Vec::new(),
        category_ids: Vec::new(),
        attachment_ids: Vec::new(),
    }
}
