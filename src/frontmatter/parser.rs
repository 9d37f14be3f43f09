//! Splitting an entry document into its front matter block and body.

use thiserror::Error;

/// Borrowed view of one entry document, split at the delimiters.
#[derive(Debug, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Trimmed text between the opening and closing `---` lines.
    pub front: &'a str,
    /// Trimmed text after the closing `---` line.
    pub body: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The document does not start with an opening `---` line.
    #[error("no front matter found")]
    MissingOpen,
    /// An opening `---` was never closed.
    #[error("no front matter found: missing closing `---`")]
    MissingClose,
}

/// Splits a document into front matter and body.
///
/// The document must begin with `---\n`; the block ends at the first line
/// starting with `---` after that. Both parts come back trimmed, borrowed
/// from the input.
///
/// # Errors
/// [`Error::MissingOpen`] when the document does not start with a
/// delimiter, [`Error::MissingClose`] when the block is never closed.
///
/// # Example
/// ```
/// use xjs_store::frontmatter::parser::split_front_matter;
///
/// let raw = "---\nid: \"e1\"\n---\n\n<p>Hello</p>\n";
/// let entry = split_front_matter(raw).unwrap();
///
/// assert_eq!(entry.front, "id: \"e1\"");
/// assert_eq!(entry.body, "<p>Hello</p>");
/// ```
pub fn split_front_matter(raw: &str) -> Result<RawEntry<'_>, Error> {
    let rest = raw.strip_prefix("---\n").ok_or(Error::MissingOpen)?;
    let close = rest.find("\n---").ok_or(Error::MissingClose)?;

    Ok(RawEntry {
        front: rest[..close].trim(),
        body: rest[close + "\n---".len()..].trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Error, RawEntry, split_front_matter};

    #[test]
    fn splits_front_and_body() {
        let raw = "---\nid: \"e1\"\ntitle: \"First\"\n---\n\n<p>body</p>\n";

        assert_eq!(
            split_front_matter(raw).unwrap(),
            RawEntry {
                front: "id: \"e1\"\ntitle: \"First\"",
                body: "<p>body</p>",
            }
        );
    }

    #[test]
    fn empty_body() {
        let raw = "---\nid: \"e1\"\n---\n\n";

        assert_eq!(
            split_front_matter(raw).unwrap(),
            RawEntry {
                front: "id: \"e1\"",
                body: "",
            }
        );
    }

    #[test]
    fn body_keeps_later_delimiters() {
        let raw = "---\nid: \"e1\"\n---\n\nabove\n---\nbelow\n";
        let entry = split_front_matter(raw).unwrap();

        assert_eq!(entry.body, "above\n---\nbelow");
    }

    #[test]
    fn missing_open_delimiter() {
        assert_eq!(
            split_front_matter("id: \"e1\"\n---\n"),
            Err(Error::MissingOpen)
        );
    }

    #[test]
    fn leading_whitespace_is_not_an_open_delimiter() {
        assert_eq!(
            split_front_matter("  ---\nid: \"e1\"\n---\n"),
            Err(Error::MissingOpen)
        );
    }

    #[test]
    fn missing_close_delimiter() {
        assert_eq!(
            split_front_matter("---\nid: \"e1\"\nbody"),
            Err(Error::MissingClose)
        );
    }

    #[test]
    fn error_messages_name_the_condition() {
        assert_eq!(Error::MissingOpen.to_string(), "no front matter found");
        assert!(Error::MissingClose.to_string().starts_with("no front matter found"));
    }
}
