//! Curriculum payload sources
//!
//! The portal fetches `GET /curriculum?id=<testerId>`; here a saved response is
//! loaded from disk or from an in-memory string instead.

use crate::core::models::curriculum::{CurriculumError, CurriculumTable};
use crate::info;
use std::path::{Path, PathBuf};

/// Something that can produce a curriculum table
pub trait CurriculumSource {
    /// Load and parse the curriculum payload
    ///
    /// # Errors
    /// Returns a [`CurriculumError`] if the payload cannot be read or is malformed
    fn load(&self) -> Result<CurriculumTable, CurriculumError>;

    /// Human-readable origin of the payload, used in messages
    fn describe(&self) -> String;
}

/// Payload saved as a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the payload file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CurriculumSource for FileSource {
    fn load(&self) -> Result<CurriculumTable, CurriculumError> {
        let table = CurriculumTable::from_file(&self.path)?;
        info!("Curriculum loaded: {}", self.path.display());
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Payload held in memory
#[derive(Debug, Clone)]
pub struct JsonSource {
    payload: String,
}

impl JsonSource {
    /// Create a source over a raw JSON payload
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl CurriculumSource for JsonSource {
    fn load(&self) -> Result<CurriculumTable, CurriculumError> {
        CurriculumTable::from_payload_str(&self.payload)
    }

    fn describe(&self) -> String {
        "<inline payload>".to_string()
    }
}
