//! Persisted dashboard state.
//!
//! Two independent JSON records live in the state directory:
//!
//! - `layouts.json`: the committed [`BreakpointLayouts`].
//! - `widgets.json`: the catalog-derived list of active
//!   [`WidgetDefinition`]s.
//!
//! Both are opaque blobs to everything outside this crate. They are read
//! once at startup (missing files are not an error; corrupt files are) and
//! written only at explicit commit points. Format stability across versions
//! is a non-goal; unreadable records degrade to the compiled-in defaults at
//! the restore layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::xdg;
use crate::layout::BreakpointLayouts;
use crate::widgets::WidgetDefinition;

const LAYOUTS_FILE: &str = "layouts.json";
const WIDGETS_FILE: &str = "widgets.json";

/// Errors that can occur when reading or writing the persisted records.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a record from disk.
    #[error("Failed to read state file: {path}")]
    Read {
        /// Path to the record that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record exists but could not be deserialized.
    #[error("Invalid state file: {path}")]
    Parse {
        /// Path to the record containing the error.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write a record to disk.
    #[error("Failed to write state file: {path}")]
    Write {
        /// Path to the record that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized to JSON.
    #[error("Failed to encode state file: {path}")]
    Encode {
        /// Path the record was destined for.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Handle on the directory holding the persisted records.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store at the default per-user data directory.
    pub fn default_location() -> Self {
        Self::new(xdg::data_dir())
    }

    /// The directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the layouts record.
    pub fn layouts_path(&self) -> PathBuf {
        self.dir.join(LAYOUTS_FILE)
    }

    /// Path of the widget-list record.
    pub fn widgets_path(&self) -> PathBuf {
        self.dir.join(WIDGETS_FILE)
    }

    /// Loads the persisted layouts. `Ok(None)` when no record exists.
    pub fn load_layouts(&self) -> Result<Option<BreakpointLayouts>, StorageError> {
        self.load(&self.layouts_path())
    }

    /// Writes the layouts record, creating the state directory if needed.
    pub fn save_layouts(&self, layouts: &BreakpointLayouts) -> Result<(), StorageError> {
        self.save(&self.layouts_path(), layouts)
    }

    /// Loads the persisted widget list. `Ok(None)` when no record exists.
    pub fn load_widgets(&self) -> Result<Option<Vec<WidgetDefinition>>, StorageError> {
        self.load(&self.widgets_path())
    }

    /// Writes the widget-list record, creating the state directory if needed.
    pub fn save_widgets(&self, widgets: &[WidgetDefinition]) -> Result<(), StorageError> {
        self.save(&self.widgets_path(), &widgets)
    }

    /// Deletes both records if they exist.
    pub fn reset(&self) -> Result<(), StorageError> {
        for path in [self.layouts_path(), self.widgets_path()] {
            match fs::remove_file(&path) {
                Ok(()) => tracing::debug!("removed {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StorageError::Write { path, source: e }),
            }
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StorageError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        let value = serde_json::from_str(&content).map_err(|e| StorageError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Some(value))
    }

    fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        xdg::ensure_dir(&self.dir).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        let json = serde_json::to_string_pretty(value).map_err(|e| StorageError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, json).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
