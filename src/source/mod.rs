//! Sources - where the record collection comes from.
//!
//! A source produces a fully-materialized collection before the engine is
//! initialized. Load failures never reach the engine: `load_or_empty` logs
//! them and hands back an empty collection.

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::record::Record;

/// Produces the full record collection.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<Record>, SourceError>;
}

/// Reads a JSON array of records from a file.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Record>, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Parses a JSON array of records held in memory.
#[derive(Clone, Debug)]
pub struct JsonStrSource {
    json: String,
}

impl JsonStrSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl RecordSource for JsonStrSource {
    fn load(&self) -> Result<Vec<Record>, SourceError> {
        Ok(serde_json::from_str(&self.json)?)
    }
}

/// An already-materialized collection.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn load(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Load from `source`, or an empty collection if loading fails.
pub fn load_or_empty<S: RecordSource + ?Sized>(source: &S) -> Vec<Record> {
    match source.load() {
        Ok(records) => {
            tracing::info!(records = records.len(), "records loaded");
            records
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load records, continuing with none");
            Vec::new()
        }
    }
}
