//! Record labels and reference resolution.
//!
//! Autocomplete offers labels such as `"Champion Destroyer [1a2b3c4d]"`. The
//! bracketed part is the start of the record's id, so two discs with the same
//! name stay distinguishable. When a user types a value by hand without the
//! bracket, the reference falls back to a case-insensitive match on the label
//! text, which must be unambiguous.

use crate::{
    core::{stores::Stores, totals::format_currency},
    errors::{Error, Result},
    models::{Cash, Disc, Tag},
};
use uuid::Uuid;

const SHORT_ID_LEN: usize = 8;

/// Longest label text kept before the id suffix (Discord caps choices at 100 chars).
const MAX_LABEL_TEXT: usize = 80;

/// The first eight hex digits of an id.
#[must_use]
pub fn short_id(id: Uuid) -> String {
    let mut simple = id.simple().to_string();
    simple.truncate(SHORT_ID_LEN);
    simple
}

fn with_id(text: &str, id: Uuid) -> String {
    let text: String = text.chars().take(MAX_LABEL_TEXT).collect();
    format!("{} [{}]", text.trim(), short_id(id))
}

/// Autocomplete label for a disc.
#[must_use]
pub fn disc_label(disc: &Disc) -> String {
    with_id(&disc.to_string(), disc.id)
}

/// Autocomplete label for a cash entry.
#[must_use]
pub fn cash_label(cash: &Cash) -> String {
    with_id(&format!("{}: {}", format_currency(cash.amount), cash.memo), cash.id)
}

/// Autocomplete label for a tag.
#[must_use]
pub fn tag_label(tag: &Tag) -> String {
    let title = if tag.title.trim().is_empty() {
        "(untitled)"
    } else {
        tag.title.as_str()
    };
    with_id(title, tag.id)
}

/// Splits `"text [abcd1234]"` into the text and the bracketed id prefix.
fn split_reference(input: &str) -> (&str, Option<&str>) {
    let input = input.trim();
    if let Some(start) = input.rfind('[') {
        if let Some(inner) = input[start + 1..].strip_suffix(']') {
            let inner = inner.trim();
            if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_hexdigit()) {
                return (input[..start].trim(), Some(inner));
            }
        }
    }
    (input, None)
}

/// Finds the single record `input` refers to.
fn resolve<'a, T>(
    records: &'a [T],
    input: &str,
    id_of: impl Fn(&T) -> Uuid,
    text_of: impl Fn(&T) -> String,
) -> Option<&'a T> {
    let (text, prefix) = split_reference(input);

    if let Ok(id) = Uuid::parse_str(text) {
        return records.iter().find(|r| id_of(r) == id);
    }

    let candidates: Vec<&T> = match prefix {
        Some(prefix) => {
            let prefix = prefix.to_ascii_lowercase();
            records
                .iter()
                .filter(|r| id_of(r).simple().to_string().starts_with(&prefix))
                .collect()
        }
        None => records
            .iter()
            .filter(|r| text_of(r).trim().eq_ignore_ascii_case(text))
            .collect(),
    };

    match candidates.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

/// Resolves a disc reference.
pub fn resolve_disc<'a>(stores: &'a Stores, input: &str) -> Result<&'a Disc> {
    resolve(stores.discs(), input, |d| d.id, ToString::to_string).ok_or_else(|| {
        Error::DiscNotFound {
            id: input.to_string(),
        }
    })
}

/// Resolves a cash entry reference.
pub fn resolve_cash<'a>(stores: &'a Stores, input: &str) -> Result<&'a Cash> {
    resolve(stores.cash(), input, |c| c.id, |c| c.memo.clone()).ok_or_else(|| {
        Error::CashNotFound {
            id: input.to_string(),
        }
    })
}

/// Resolves a tag reference.
pub fn resolve_tag<'a>(stores: &'a Stores, input: &str) -> Result<&'a Tag> {
    resolve(stores.tags(), input, |t| t.id, |t| t.title.clone()).ok_or_else(|| {
        Error::TagNotFound {
            id: input.to_string(),
        }
    })
}

/// Labels of the records whose label contains `partial` (case-insensitive), capped at 25.
pub fn matching_labels<T>(
    records: &[T],
    partial: &str,
    label_of: impl Fn(&T) -> String,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    records
        .iter()
        .map(label_of)
        .filter(|label| label.to_lowercase().contains(&partial_lower))
        .take(25) // Discord autocomplete limit
        .collect()
}
