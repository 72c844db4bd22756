use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;

use super::{SortField, SortOrder, SortSpec};
use crate::record::Record;

/// Locale-aware comparison of lower-cased titles.
///
/// Uses the root collation so accented text orders the way people read it
/// ("éclair" between "apple" and "zebra"). If collation data cannot be
/// loaded, falls back to code-point order.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleCollator {
    pub fn new() -> Self {
        match Collator::try_new(&DataLocale::default(), CollatorOptions::new()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(err) => {
                tracing::warn!(error = %err, "collator unavailable, using code-point order");
                Self::code_point()
            }
        }
    }

    /// A collator that compares by code point only.
    pub fn code_point() -> Self {
        Self { collator: None }
    }

    pub fn is_locale_aware(&self) -> bool {
        self.collator.is_some()
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

/// Stable in-place sort of `indices` (positions in `records`).
///
/// `lowered[i]` is the lower-cased title of `records[i]`. Descending flips the
/// comparison only, so equal keys keep their current relative order.
pub(crate) fn sort_indices(
    indices: &mut [usize],
    spec: SortSpec,
    records: &[Record],
    lowered: &[String],
    collator: &TitleCollator,
) {
    indices.sort_by(|&a, &b| {
        let ord = match spec.field {
            SortField::Price => records[a].price.total_cmp(&records[b].price),
            SortField::Name => collator.compare(&lowered[a], &lowered[b]),
        };
        match spec.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}
