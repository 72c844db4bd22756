//! View Engine - owns the record collection and the query state, and derives
//! the visible page from them.
//!
//! All operations are synchronous and total: out-of-range input is absorbed
//! (ignored or degraded to "match everything") rather than reported.
//!
//! ## Example
//!
//! ```
//! use product_view::{Record, SortField, SortOrder, ViewEngine, ResultsSummary};
//!
//! let mut engine = ViewEngine::default();
//! engine.initialize(vec![
//!     Record::new(1, "Apple", 3.0),
//!     Record::new(2, "Cherry", 1.0),
//!     Record::new(3, "Banana", 2.0),
//! ]);
//!
//! engine.search("an");
//! engine.sort(SortField::Price, SortOrder::Ascending);
//!
//! let titles: Vec<_> = engine.current_page_items().iter().map(|r| r.title.as_str()).collect();
//! assert_eq!(titles, vec!["Banana"]);
//! assert_eq!(
//!     engine.results_summary(),
//!     ResultsSummary::Range { start: 1, end: 1, total: 1 }
//! );
//! ```

mod pagination;

use std::sync::{Arc, Mutex};

use crate::config::ViewConfig;
use crate::query::{
    normalize_term, sort_indices, QueryState, SortField, SortOrder, SortSpec, TitleCollator,
};
use crate::record::Record;
use crate::render::{NullRenderer, PaginationControls, RenderFrame, Renderer};
use crate::source::{load_or_empty, RecordSource};

pub use pagination::{page_bounds, summarize, total_pages, window, PageLink, ResultsSummary};

/// An engine shared between the input layer and its owner.
pub type SharedEngine<R> = Arc<Mutex<ViewEngine<R>>>;

/// Derives a filtered, sorted, paged view of a fixed record collection.
///
/// The matched set is kept as indices into the collection. `search` rebuilds
/// it in collection order and re-applies the remembered sort; `sort` re-orders
/// it in place with a stable sort, so ties keep their pre-sort order.
pub struct ViewEngine<R = NullRenderer> {
    records: Vec<Record>,
    lowered_titles: Vec<String>,
    matched: Vec<usize>,
    query: QueryState,
    config: ViewConfig,
    collator: TitleCollator,
    renderer: R,
}

impl Default for ViewEngine<NullRenderer> {
    fn default() -> Self {
        Self::new(NullRenderer)
    }
}

impl<R> ViewEngine<R> {
    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The full collection, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Whether title sorting uses locale-aware collation.
    pub fn is_locale_aware(&self) -> bool {
        self.collator.is_locale_aware()
    }

    /// The matched set: filtered by the search term, sorted if a sort is active.
    pub fn matched(&self) -> Vec<&Record> {
        self.matched.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn matched_len(&self) -> usize {
        self.matched.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.matched.len(), self.query.page_size)
    }

    /// Items on the current page, in matched-set order. Never more than
    /// `page_size` items.
    pub fn current_page_items(&self) -> Vec<&Record> {
        let range = page_bounds(self.query.page, self.query.page_size, self.matched.len());
        self.matched[range].iter().map(|&i| &self.records[i]).collect()
    }

    pub fn results_summary(&self) -> ResultsSummary {
        summarize(self.query.page, self.query.page_size, self.matched.len())
    }

    pub fn pagination_window(&self) -> Vec<PageLink> {
        window(self.query.page, self.total_pages(), self.config.window_width)
    }

    pub fn pagination_controls(&self) -> PaginationControls {
        let total_pages = self.total_pages();
        PaginationControls {
            links: self.pagination_window(),
            current: self.query.page,
            total_pages,
            has_previous: self.query.page > 1,
            has_next: self.query.page < total_pages,
        }
    }

    /// Snapshot of the current view as plain data.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            items: self.current_page_items().into_iter().cloned().collect(),
            summary: self.results_summary(),
            pagination: self.pagination_controls(),
            search_term: self.query.search_term.clone(),
            sort: self.query.sort,
        }
    }

    /// Wrap the engine for sharing with the input layer.
    pub fn into_shared(self) -> SharedEngine<R> {
        Arc::new(Mutex::new(self))
    }

    fn rebuild_matches(&mut self) {
        let term = normalize_term(&self.query.search_term);
        self.matched = if term.is_empty() {
            (0..self.records.len()).collect()
        } else {
            self.lowered_titles
                .iter()
                .enumerate()
                .filter(|(_, title)| title.contains(&term))
                .map(|(i, _)| i)
                .collect()
        };
        if let Some(spec) = self.query.sort {
            self.apply_sort(spec);
        }
    }

    fn apply_sort(&mut self, spec: SortSpec) {
        sort_indices(
            &mut self.matched,
            spec,
            &self.records,
            &self.lowered_titles,
            &self.collator,
        );
    }
}

impl<R: Renderer> ViewEngine<R> {
    /// Create an empty engine with default configuration.
    pub fn new(renderer: R) -> Self {
        Self::with_config(ViewConfig::default(), renderer)
    }

    pub fn with_config(config: ViewConfig, renderer: R) -> Self {
        Self {
            records: Vec::new(),
            lowered_titles: Vec::new(),
            matched: Vec::new(),
            query: QueryState::with_page_size(config.page_size),
            config,
            collator: TitleCollator::new(),
            renderer,
        }
    }

    /// Use a specific collator (e.g. `TitleCollator::code_point()`).
    pub fn with_collator(mut self, collator: TitleCollator) -> Self {
        self.collator = collator;
        self.rebuild_matches();
        self
    }

    /// Replace the collection and reset the query state to defaults.
    ///
    /// Duplicate ids are passed through unchanged.
    pub fn initialize(&mut self, records: Vec<Record>) {
        self.lowered_titles = records.iter().map(|r| r.title.to_lowercase()).collect();
        self.records = records;
        self.query = QueryState::with_page_size(self.config.page_size);
        self.rebuild_matches();
        tracing::debug!(records = self.records.len(), "view initialized");
        self.render();
    }

    /// Load from `source`, degrading to an empty collection on failure.
    pub fn initialize_from<S: RecordSource + ?Sized>(&mut self, source: &S) {
        self.initialize(load_or_empty(source));
    }

    /// Filter by case-insensitive title substring and return to page 1.
    ///
    /// A blank term matches every record. An active sort is re-applied.
    pub fn search(&mut self, term: &str) {
        self.query.search_term = term.to_string();
        self.rebuild_matches();
        self.query.page = 1;
        tracing::debug!(
            term = %self.query.search_term,
            matched = self.matched.len(),
            "search applied"
        );
        self.render();
    }

    /// Sort the current matched set. Keeps the current page.
    pub fn sort(&mut self, field: SortField, order: SortOrder) {
        self.sort_by(SortSpec::new(field, order));
    }

    pub fn sort_by(&mut self, spec: SortSpec) {
        self.query.sort = Some(spec);
        self.apply_sort(spec);
        tracing::debug!(sort = %spec, page = self.query.page, "sort applied");
        self.render();
    }

    /// Change the page size and return to page 1. A zero size is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            tracing::warn!("ignoring page size 0");
            return;
        }
        self.query.page_size = size;
        self.query.page = 1;
        tracing::debug!(
            page_size = size,
            total_pages = self.total_pages(),
            "page size changed"
        );
        self.render();
    }

    /// Navigate to `page` if it is within `[1, total_pages]`.
    ///
    /// Out-of-range requests change nothing and render nothing. Returns
    /// whether the request was accepted.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let total = self.total_pages();
        let target = match usize::try_from(page) {
            Ok(p) if (1..=total).contains(&p) => p,
            _ => {
                tracing::debug!(page, total_pages = total, "page out of range, ignored");
                return false;
            }
        };
        self.query.page = target;
        tracing::debug!(page = target, total_pages = total, "page changed");
        self.render();
        true
    }

    /// Push the current frame to the renderer.
    pub fn render(&mut self) {
        let frame = self.frame();
        self.renderer.render(&frame);
    }
}
