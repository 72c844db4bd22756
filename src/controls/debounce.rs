//! Debounced search input.
//!
//! A background thread holds the most recent search term and applies it to
//! the engine once input has been quiet for the configured window.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::ViewConfig;
use crate::engine::SharedEngine;
use crate::render::Renderer;

/// Statistics from the debouncer thread.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DebounceStats {
    pub inputs: usize,
    pub searches: usize,
    pub cancelled: usize,
}

enum Signal {
    Input(String),
    Cancel,
    Stop,
}

/// Coalesces bursts of search input into at most one `search` per quiet
/// window.
///
/// ## Example
///
/// ```ignore
/// use product_view::{SearchDebouncer, ViewEngine};
/// use std::time::Duration;
///
/// let engine = ViewEngine::default().into_shared();
/// let debouncer = SearchDebouncer::spawn(engine.clone(), Duration::from_millis(200));
///
/// debouncer.input("a");
/// debouncer.input("ap");
/// debouncer.input("app"); // only this one reaches the engine
///
/// let stats = debouncer.stop();
/// ```
pub struct SearchDebouncer {
    tx: Sender<Signal>,
    handle: Option<JoinHandle<DebounceStats>>,
}

impl SearchDebouncer {
    /// Spawn a debouncer using the configured quiet window.
    pub fn from_config<R>(engine: SharedEngine<R>, config: &ViewConfig) -> Self
    where
        R: Renderer + Send + 'static,
    {
        Self::spawn(engine, config.search_debounce())
    }

    pub fn spawn<R>(engine: SharedEngine<R>, quiet: Duration) -> Self
    where
        R: Renderer + Send + 'static,
    {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let mut stats = DebounceStats::default();
            let mut pending: Option<String> = None;

            loop {
                let signal = if pending.is_some() {
                    match rx.recv_timeout(quiet) {
                        Ok(signal) => signal,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(term) = pending.take() {
                                match engine.lock() {
                                    Ok(mut engine) => {
                                        engine.search(&term);
                                        stats.searches += 1;
                                    }
                                    Err(_) => {
                                        tracing::error!("engine lock poisoned, dropping search");
                                    }
                                }
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(signal) => signal,
                        Err(_) => break,
                    }
                };

                match signal {
                    Signal::Input(term) => {
                        stats.inputs += 1;
                        pending = Some(term);
                    }
                    Signal::Cancel => {
                        if pending.take().is_some() {
                            stats.cancelled += 1;
                        }
                    }
                    Signal::Stop => break,
                }
            }

            if pending.is_some() {
                stats.cancelled += 1;
            }
            stats
        });

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Record a keystroke's worth of input, restarting the quiet window.
    pub fn input(&self, term: impl Into<String>) {
        if self.tx.send(Signal::Input(term.into())).is_err() {
            tracing::warn!("search debouncer stopped, input dropped");
        }
    }

    /// Drop the pending term, if any, without searching.
    pub fn cancel(&self) {
        let _ = self.tx.send(Signal::Cancel);
    }

    /// Stop the thread and wait for it. A pending term is dropped.
    pub fn stop(mut self) -> DebounceStats {
        let _ = self.tx.send(Signal::Stop);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or_default()
        } else {
            DebounceStats::default()
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(Signal::Stop);
    }
}
