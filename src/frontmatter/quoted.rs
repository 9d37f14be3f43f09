//! Quoting grammar shared by the encoder and decoder.
//!
//! Scalars are wrapped in double quotes with `\` escaped before `"`, in
//! that order; unescaping is a single pass where a backslash escapes the
//! following character whatever it is. Lists are bracketed, comma-space
//! joined quoted scalars, split back by a scanner that never treats a comma
//! inside an open quoted span as a separator.

/// Escapes backslashes, then quotes.
#[must_use]
pub fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes and wraps a scalar in double quotes.
///
/// # Example
/// ```
/// use xjs_store::frontmatter::quoted::quote;
///
/// assert_eq!(quote(r#"O'Brien "Tim", Jr."#), r#""O'Brien \"Tim\", Jr.""#);
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

/// Reverses [`escape`]: a backslash takes the next character literally.
///
/// A trailing lone backslash is kept as-is.
#[must_use]
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaped = false;

    for ch in value.chars() {
        if escaped {
            out.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else {
            out.push(ch);
        }
    }

    if escaped {
        out.push('\\');
    }

    out
}

/// Trims a raw value, strips one layer of wrapping quotes when both ends
/// carry one, and unescapes the rest.
///
/// Unquoted values are unescaped too, matching the encoder's leniency on
/// round trips of hand-edited files.
#[must_use]
pub fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);

    unescape(inner)
}

/// Renders a list value: `[` + comma-space-joined quoted scalars + `]`.
///
/// An empty list renders as `[]`.
#[must_use]
pub fn join_quoted<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = items.into_iter().map(|item| quote(item.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingQuote,
    InQuote,
    Escaped,
}

/// Splits list contents on commas, honoring quoted spans.
///
/// A comma inside an open quoted span is payload, not a separator; a
/// backslash inside a span escapes the following character. Returned slices
/// are raw (still quoted and escaped) and untrimmed.
#[must_use]
pub fn split_quoted(inner: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut state = State::SeekingQuote;

    for (pos, ch) in inner.char_indices() {
        match state {
            State::SeekingQuote => match ch {
                ',' => {
                    items.push(&inner[start..pos]);
                    start = pos + 1;
                }
                '"' => state = State::InQuote,
                _ => {}
            },
            State::InQuote => match ch {
                '"' => state = State::SeekingQuote,
                '\\' => state = State::Escaped,
                _ => {}
            },
            State::Escaped => state = State::InQuote,
        }
    }

    items.push(&inner[start..]);
    items
}

/// Parses a full bracketed list value into its scalars.
///
/// Lenient on shape: a missing closing bracket is tolerated, items are
/// trimmed and unquoted, and empty items are dropped (so `[]` is an empty
/// list, not one empty string).
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    split_quoted(inner)
        .into_iter()
        .map(unquote)
        .filter(|item| !item.is_empty())
        .collect()
}
