use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One entry in the compact pagination strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Position of the current page within the matched set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsSummary {
    /// Nothing matched; callers show a "no results" message.
    Empty,
    /// 1-based inclusive `start..=end` out of `total`.
    Range {
        start: usize,
        end: usize,
        total: usize,
    },
}

impl ResultsSummary {
    pub fn total(&self) -> usize {
        match self {
            ResultsSummary::Empty => 0,
            ResultsSummary::Range { total, .. } => *total,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultsSummary::Empty)
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Index range of `page` in a matched set of `total` items.
///
/// Pages past the end produce an empty range rather than panicking.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = page.saturating_mul(page_size).min(total);
    start..end
}

pub fn summarize(page: usize, page_size: usize, total: usize) -> ResultsSummary {
    if total == 0 {
        return ResultsSummary::Empty;
    }
    ResultsSummary::Range {
        start: page.saturating_sub(1) * page_size + 1,
        end: (page * page_size).min(total),
        total,
    }
}

/// Compact page strip: up to `width` consecutive pages around `current`,
/// anchored by the first and last page with an ellipsis over any gap.
///
/// Empty when there is at most one page.
pub fn window(current: usize, total_pages: usize, width: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let width = width.max(1);
    let current = current.clamp(1, total_pages);

    let mut start = current.saturating_sub(width / 2).max(1);
    let end = (start + width - 1).min(total_pages);
    if end - start < width - 1 {
        start = end.saturating_sub(width - 1).max(1);
    }

    let mut links = Vec::with_capacity(width + 4);
    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total_pages));
    }
    links
}
