//! Controls - the input side of the engine.
//!
//! The engine trusts its callers to pass only enumerated sort and page-size
//! values. These types are that enumeration: they parse UI keys, validate
//! against the configuration, and translate clicks into engine calls.
//!
//! - `SortControl` - the four sort buttons
//! - `PageControl` - previous / numbered / next pagination buttons
//! - `select_page_size` - page-size selector validated against `ViewConfig`
//! - `SearchDebouncer` - coalesces search keystrokes

mod debounce;

use std::fmt;
use std::str::FromStr;

use crate::engine::ViewEngine;
use crate::error::ControlError;
use crate::query::{SortField, SortOrder, SortSpec};
use crate::render::Renderer;

pub use debounce::{DebounceStats, SearchDebouncer};

/// One of the four sort buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortControl {
    PriceAscending,
    PriceDescending,
    NameAscending,
    NameDescending,
}

impl SortControl {
    pub const ALL: [SortControl; 4] = [
        SortControl::PriceAscending,
        SortControl::PriceDescending,
        SortControl::NameAscending,
        SortControl::NameDescending,
    ];

    /// Key used to identify the button (`price-asc`, `name-desc`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            SortControl::PriceAscending => "price-asc",
            SortControl::PriceDescending => "price-desc",
            SortControl::NameAscending => "name-asc",
            SortControl::NameDescending => "name-desc",
        }
    }

    pub fn spec(&self) -> SortSpec {
        match self {
            SortControl::PriceAscending => SortSpec::new(SortField::Price, SortOrder::Ascending),
            SortControl::PriceDescending => SortSpec::new(SortField::Price, SortOrder::Descending),
            SortControl::NameAscending => SortSpec::new(SortField::Name, SortOrder::Ascending),
            SortControl::NameDescending => SortSpec::new(SortField::Name, SortOrder::Descending),
        }
    }

    /// The button to highlight for the engine's active sort.
    pub fn active<R>(engine: &ViewEngine<R>) -> Option<Self> {
        engine.query().sort.map(Self::from)
    }

    pub fn apply<R: Renderer>(&self, engine: &mut ViewEngine<R>) {
        engine.sort_by(self.spec());
    }
}

impl From<SortSpec> for SortControl {
    fn from(spec: SortSpec) -> Self {
        match (spec.field, spec.order) {
            (SortField::Price, SortOrder::Ascending) => SortControl::PriceAscending,
            (SortField::Price, SortOrder::Descending) => SortControl::PriceDescending,
            (SortField::Name, SortOrder::Ascending) => SortControl::NameAscending,
            (SortField::Name, SortOrder::Descending) => SortControl::NameDescending,
        }
    }
}

impl FromStr for SortControl {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|control| control.key() == s)
            .ok_or_else(|| ControlError::UnknownSort(s.to_string()))
    }
}

impl fmt::Display for SortControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A pagination button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    Previous,
    Number(usize),
    Next,
}

impl PageControl {
    /// The page this button asks for, given the current page. May be out of
    /// range (e.g. `Previous` on page 1); the engine ignores those.
    pub fn target(&self, current: usize) -> i64 {
        let current = i64::try_from(current).unwrap_or(i64::MAX);
        match self {
            PageControl::Previous => current - 1,
            PageControl::Number(n) => i64::try_from(*n).unwrap_or(i64::MAX),
            PageControl::Next => current.saturating_add(1),
        }
    }

    /// Returns whether the engine accepted the navigation.
    pub fn apply<R: Renderer>(&self, engine: &mut ViewEngine<R>) -> bool {
        let target = self.target(engine.query().page);
        engine.go_to_page(target)
    }
}

/// Change the page size if `size` is one of the configured choices.
///
/// An empty `page_sizes` list accepts any positive size.
pub fn select_page_size<R: Renderer>(
    engine: &mut ViewEngine<R>,
    size: usize,
) -> Result<(), ControlError> {
    let allowed = &engine.config().page_sizes;
    if size == 0 || (!allowed.is_empty() && !allowed.contains(&size)) {
        return Err(ControlError::PageSizeNotOffered(size));
    }
    engine.set_page_size(size);
    Ok(())
}
