//! Query state - the tuple of search term, sort spec, page and page size
//! that a view is derived from.

mod sort;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use sort::TitleCollator;
pub(crate) use sort::sort_indices;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Attribute a sort orders by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Price,
    Name,
}

/// Direction of a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// An active sort: one field, one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Price => write!(f, "price"),
            SortField::Name => write!(f, "name"),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.order)
    }
}

/// Engine-owned query parameters.
///
/// `page` is 1-based and always lies in `[1, total_pages]` for the matched
/// set it was computed against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_term: String,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Defaults with a specific page size (clamped to at least 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }
}

/// Normalize a search term: trim surrounding whitespace and lower-case.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}
