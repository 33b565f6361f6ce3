//! Runtime configuration.
//!
//! Values come from defaults, optionally overridden by environment
//! variables. Blank overrides are ignored.

use camino::{Utf8Path, Utf8PathBuf};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "taskflow-boards";

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = ".taskflow";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TASKFLOW_DATA_DIR";

/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "TASKFLOW_STORAGE_KEY";

/// Environment variable overriding the log filter.
pub const LOG_FILTER_ENV: &str = "TASKFLOW_LOG";

/// Settings for storage and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskflowConfig {
    data_dir: Utf8PathBuf,
    storage_key: String,
    log_filter: String,
}

impl Default for TaskflowConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl TaskflowConfig {
    /// Creates a configuration populated with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            data_dir: non_blank(DATA_DIR_ENV).map_or(defaults.data_dir, Utf8PathBuf::from),
            storage_key: non_blank(STORAGE_KEY_ENV).unwrap_or(defaults.storage_key),
            log_filter: non_blank(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
        }
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the log filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }

    /// Returns the directory holding persisted data.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the key the board collection is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the `tracing` filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
