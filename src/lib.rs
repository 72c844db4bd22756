//! In-memory product view engine.
//!
//! A `ViewEngine` owns a fixed collection of `Record`s and a `QueryState`
//! (search term, sort, page, page size) and derives the visible page from
//! them. Loading data, drawing the view and wiring input are collaborators
//! around the engine: `source`, `render` and `controls`.

pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod query;
pub mod record;
pub mod render;
pub mod source;

pub use config::ViewConfig;
pub use controls::{select_page_size, DebounceStats, PageControl, SearchDebouncer, SortControl};
pub use engine::{PageLink, ResultsSummary, SharedEngine, ViewEngine};
pub use error::{ConfigError, ControlError, SourceError};
pub use query::{normalize_term, QueryState, SortField, SortOrder, SortSpec, TitleCollator};
pub use record::{Category, Record};
#[cfg(feature = "emitter")]
pub use render::LocalEmitterRenderer;
pub use render::{
    LogRenderer, NullRenderer, PaginationControls, ProductRow, RenderFrame, Renderer,
};
pub use source::{load_or_empty, JsonFileSource, JsonStrSource, RecordSource, StaticSource};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
