//! Render - the consumer side of the engine.
//!
//! After every accepted mutation the engine hands a `RenderFrame` to its
//! `Renderer`. Renderers only read the frame; they never call back into the
//! engine.
//!
//! - `NullRenderer` - discards frames (headless use, tests)
//! - `LogRenderer` - one text line per frame, to stdout or a shared buffer
//! - `LocalEmitterRenderer` - JSON frame on an in-process event emitter
//!   (requires `emitter` feature)

mod presenter;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[cfg(feature = "emitter")]
use crate::EventEmitter;
use crate::engine::{PageLink, ResultsSummary};
use crate::query::SortSpec;
use crate::record::Record;

pub use presenter::{
    fallback_image_url, page_label, resolve_image_url, summary_text, truncate_text, ProductRow,
    NO_CATEGORY,
};

/// Event name used by `LocalEmitterRenderer`.
pub const RENDER_EVENT: &str = "render";

/// Pagination controls for the current view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationControls {
    /// Empty when there is at most one page.
    pub links: Vec<PageLink>,
    pub current: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Everything a renderer needs to draw one state of the view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub items: Vec<Record>,
    pub summary: ResultsSummary,
    pub pagination: PaginationControls,
    pub search_term: String,
    pub sort: Option<SortSpec>,
}

impl RenderFrame {
    /// Display rows for the page items.
    pub fn rows(&self, description_max_chars: usize) -> Vec<ProductRow> {
        self.items
            .iter()
            .map(|r| ProductRow::from_record(r, description_max_chars))
            .collect()
    }

    /// One-line text rendering: summary, page label and item ids.
    pub fn to_line(&self) -> String {
        let ids: Vec<String> = self.items.iter().map(|r| r.id.to_string()).collect();
        format!(
            "[VIEW] {} | {} | ids=[{}]",
            summary_text(&self.summary),
            page_label(self.pagination.current, self.pagination.total_pages),
            ids.join(",")
        )
    }
}

/// Consumer of render frames.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame) {
        (**self).render(frame)
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &RenderFrame) {}
}

/// Writes `RenderFrame::to_line` to stdout or a shared buffer.
#[derive(Clone, Debug, Default)]
pub struct LogRenderer {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogRenderer {
    pub fn new() -> Self {
        LogRenderer { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogRenderer {
            buffer: Some(buffer),
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        let line = frame.to_line();
        match &self.buffer {
            Some(buffer) => match buffer.lock() {
                Ok(mut buffer) => buffer.push(line),
                Err(_) => tracing::warn!("log renderer buffer poisoned, dropping frame"),
            },
            None => println!("{}", line),
        }
    }
}

/// Emits each frame as JSON on `RENDER_EVENT` for in-process listeners.
/// Requires the `emitter` feature to be enabled.
#[cfg(feature = "emitter")]
pub struct LocalEmitterRenderer {
    emitter: EventEmitter,
}

#[cfg(feature = "emitter")]
impl LocalEmitterRenderer {
    pub fn new(emitter: EventEmitter) -> Self {
        LocalEmitterRenderer { emitter }
    }

    /// Register a listener for rendered frames (JSON text).
    pub fn on_render<F>(&mut self, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(RENDER_EVENT, listener);
    }
}

#[cfg(feature = "emitter")]
impl Renderer for LocalEmitterRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        match serde_json::to_string(frame) {
            Ok(json) => {
                self.emitter.emit(RENDER_EVENT, json);
            }
            Err(err) => tracing::error!(error = %err, "failed to encode render frame"),
        }
    }
}
