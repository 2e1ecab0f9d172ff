//! # Entry Filter
//!
//! Narrows the catalog down to one navigation bucket.
//!
//! Letter buckets compare against the title with leading punctuation
//! stripped, so `'Allo 'Allo!` lands under A. The digit bucket looks at the
//! raw first character instead, so `"3 Demon"` is a digit title but
//! `"'88 Games"` is not. That asymmetry is intentional.

use std::fmt;

use crate::core::catalog::CatalogEntry;

/// Characters skipped before matching a title against a letter bucket.
const LEADING_PUNCTUATION: &[char] = &[
    '\'', '\\', '"', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '+', '[',
    ']', '{', '}', ';', ':', ',', '<', '>', '?', '/', '|', '`', '~', ' ',
];

/// Label shown in place of an empty result set.
pub const NO_RESULTS_LABEL: &str = "No items found.";

/// A navigation key: one letter, or the digits bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Letter(char),
    Digits,
}

impl Bucket {
    /// A–Z followed by 0-9, in menu order.
    pub fn all() -> Vec<Bucket> {
        ('A'..='Z')
            .map(Bucket::Letter)
            .chain(std::iter::once(Bucket::Digits))
            .collect()
    }

    /// Parses `"A"`..`"Z"` (either case) or `"0-9"`.
    pub fn parse(key: &str) -> Option<Bucket> {
        if key == "0-9" {
            return Some(Bucket::Digits);
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(Bucket::Letter(c.to_ascii_uppercase())),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Bucket::Letter(c) => c.to_string(),
            Bucket::Digits => "0-9".to_string(),
        }
    }

    fn accepts(&self, title: &str) -> bool {
        match self {
            Bucket::Letter(letter) => title
                .trim_start_matches(LEADING_PUNCTUATION)
                .to_lowercase()
                .starts_with(letter.to_ascii_lowercase()),
            Bucket::Digits => title.chars().next().is_some_and(|c| c.is_ascii_digit()),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One row of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Title(String),
    /// Stand-in for an empty result. Not a download target.
    NoResults,
}

impl ListEntry {
    pub fn label(&self) -> &str {
        match self {
            ListEntry::Title(title) => title,
            ListEntry::NoResults => NO_RESULTS_LABEL,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, ListEntry::Title(_))
    }
}

/// Titles in `catalog` belonging to `bucket`, in catalog order.
///
/// Never returns an empty list: no match yields a single `NoResults`.
pub fn matches(catalog: &[CatalogEntry], bucket: Bucket) -> Vec<ListEntry> {
    let found: Vec<ListEntry> = catalog
        .iter()
        .filter(|entry| !entry.title.is_empty() && bucket.accepts(&entry.title))
        .map(|entry| ListEntry::Title(entry.title.clone()))
        .collect();

    if found.is_empty() {
        vec![ListEntry::NoResults]
    } else {
        found
    }
}
