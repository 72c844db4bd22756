//! ViewConfig - tunables for the engine and its collaborators.
//!
//! ```toml
//! page_size = 20
//! page_sizes = [10, 20, 50]
//! search_debounce_ms = 150
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Page size a fresh query state starts with.
    pub page_size: usize,
    /// Page sizes the page-size control offers.
    pub page_sizes: Vec<usize>,
    /// Number of consecutive page links around the current page.
    pub window_width: usize,
    /// Quiescence window before debounced search input fires.
    pub search_debounce_ms: u64,
    /// Description length shown in a product row before truncation.
    pub description_max_chars: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: vec![5, 10, 20, 50],
            window_width: 5,
            search_debounce_ms: 200,
            description_max_chars: 80,
        }
    }
}

impl ViewConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: ViewConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".into()));
        }
        if self.window_width == 0 {
            return Err(ConfigError::Invalid("window_width must be positive".into()));
        }
        if self.page_sizes.contains(&0) {
            return Err(ConfigError::Invalid("page_sizes must all be positive".into()));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
