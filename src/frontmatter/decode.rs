//! Parsing the front-matter block of one entry file.

use super::{
    EntryHeader, KEY_ATTACHMENT_IDS, KEY_ATTACHMENTS, KEY_CATEGORIES, KEY_CATEGORY_IDS,
    KEY_DATE_CREATED, KEY_ID, KEY_LOCATION, KEY_PERSON_IDS, KEY_PERSONS, KEY_TITLE,
    parser::{self, RawEntry},
    quoted,
};

/// Parses one entry document into its header and trimmed body.
///
/// Key lines are matched by shape: a value starting with `[` is a list,
/// anything else a scalar. Unknown keys, lines without a colon, and keys
/// whose value has the wrong shape are all ignored; an unparsable
/// `dateCreated` leaves [`EntryHeader::created`] unset. The only hard
/// failures are the missing delimiters.
///
/// # Errors
/// See [`parser::split_front_matter`].
///
/// # Example
/// ```
/// use xjs_store::frontmatter::parse_entry;
///
/// let raw = "---\nid: \"e1\"\npersons: [\"Jana Nováková\"]\n---\n\nbody\n";
/// let (header, body) = parse_entry(raw).unwrap();
///
/// assert_eq!(header.id.as_deref(), Some("e1"));
/// assert_eq!(header.person_names(), ["Jana Nováková"]);
/// assert_eq!(body, "body");
/// ```
pub fn parse_entry(raw: &str) -> Result<(EntryHeader, &str), parser::Error> {
    let RawEntry { front, body } = parser::split_front_matter(raw)?;
    let mut header = EntryHeader::default();

    for line in front.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if value.starts_with('[') {
            let items = quoted::parse_list(value);
            match key {
                KEY_PERSONS => header.persons = items,
                KEY_CATEGORIES => header.categories = items,
                KEY_ATTACHMENTS => header.attachments = items,
                KEY_PERSON_IDS => header.person_ids = items,
                KEY_CATEGORY_IDS => header.category_ids = items,
                KEY_ATTACHMENT_IDS => header.attachment_ids = items,
                _ => {}
            }
        } else {
            match key {
                KEY_ID => header.id = Some(quoted::unquote(value)),
                KEY_TITLE => header.title = Some(quoted::unquote(value)),
                KEY_LOCATION => header.location = Some(quoted::unquote(value)),
                KEY_DATE_CREATED => header.created = quoted::unquote(value).parse().ok(),
                _ => {}
            }
        }
    }

    Ok((header, body))
}
