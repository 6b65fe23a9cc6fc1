//! Multi-column comparator used by every sortable list.
//!
//! Rows expose their sortable values through [`SortKey`], an exhaustive
//! mapping from a closed column enum to a typed value. The comparator walks
//! the directives in priority order and falls through to the next one on a tie.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Direction of a single sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Exact match only: `"ASC"` or `" asc"` are not directions.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Applies the direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Closed set of sortable columns of one list
pub trait SortColumn: Copy + Eq + 'static {
    /// Every column, in display order. Doubles as the URL whitelist.
    const ALL: &'static [Self];

    /// Stable key used in URLs
    fn key(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|column| column.key() == key)
    }
}

/// One level of a multi-key sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective<C> {
    pub column: C,
    pub direction: SortDirection,
    /// 1-based, lower value is evaluated first
    pub priority: u32,
}

impl<C> SortDirective<C> {
    pub fn new(column: C, direction: SortDirection, priority: u32) -> Self {
        Self {
            column,
            direction,
            priority,
        }
    }
}

/// Kind of values a column holds; decides which sort icon a header shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Text,
    Number,
}

/// Value extracted from a row for one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortValue<'_> {
    /// Ascending comparison. Values of different kinds compare as equal.
    pub fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Approximates locale-aware text order.
///
/// Letters compare by their base form first (`"éclair"` sits between `"e"`
/// and `"f"`, not after `"z"`), ignoring case and diacritics. Ties are broken
/// by accents (unaccented first), then by case (lowercase first). This is not
/// a full collation: language-specific rules such as Swedish `å` after `z`
/// are not applied.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).nfd().cmp(lowercase(b).nfd()))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}

fn lowercase(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

/// Lowercased, decomposed, without combining marks
fn base_letters(value: &str) -> impl Iterator<Item = char> + '_ {
    lowercase(value).nfd().filter(|c| !is_combining_mark(*c))
}

/// Typed column accessor for a row type
pub trait SortKey<C> {
    fn sort_value(&self, column: C) -> SortValue<'_>;
}

fn compare_by_directives<T, C>(a: &T, b: &T, ordered: &[SortDirective<C>]) -> Ordering
where
    T: SortKey<C>,
    C: Copy,
{
    ordered
        .iter()
        .map(|directive| {
            let cmp = a
                .sort_value(directive.column)
                .compare(&b.sort_value(directive.column));
            directive.direction.apply(cmp)
        })
        .find(|cmp| cmp.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sorts `items` by the given directives, priority 1 first.
///
/// Without directives the input slice is handed back as is. Otherwise a new
/// vector is produced with a stable sort, so rows that tie on every
/// directive keep their original relative order.
pub fn sort_multi_data<'a, T, C>(items: &'a [T], directives: &[SortDirective<C>]) -> Cow<'a, [T]>
where
    T: SortKey<C> + Clone,
    C: Copy,
{
    if directives.is_empty() {
        return Cow::Borrowed(items);
    }

    let mut ordered = directives.to_vec();
    ordered.sort_by_key(|directive| directive.priority);

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_by_directives(a, b, &ordered));
    Cow::Owned(sorted)
}

/// Single-column variant; nothing to do unless both column and direction are set.
pub fn sort_data<'a, T, C>(
    items: &'a [T],
    column: Option<C>,
    direction: Option<SortDirection>,
) -> Cow<'a, [T]>
where
    T: SortKey<C> + Clone,
    C: Copy,
{
    match (column, direction) {
        (Some(column), Some(direction)) => {
            sort_multi_data(items, &[SortDirective::new(column, direction, 1)])
        }
        _ => Cow::Borrowed(items),
    }
}
