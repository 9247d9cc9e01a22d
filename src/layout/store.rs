//! Layout file persistence
//!
//! Loading and saving never fail from the caller's point of view: problems
//! are logged and a usable (possibly empty) document is returned. A corrupt
//! file therefore starts the application with the default layout, and the
//! next save overwrites it.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::document::LayoutDocument;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to read layout file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse layout file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode layout: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write layout file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct LayoutStore {
    path: PathBuf,
}

impl LayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the layout, or an empty document if it is missing or unreadable
    pub fn load(&self) -> LayoutDocument {
        match self.try_load() {
            Ok(Some(document)) => {
                log::info!(
                    "Loaded {} fence(s) from {}",
                    document.fences.len(),
                    self.path.display()
                );
                document
            }
            Ok(None) => {
                log::info!("No layout at {}, starting fresh", self.path.display());
                LayoutDocument::default()
            }
            Err(err) => {
                log::warn!("Error loading layout, using an empty one: {}", err);
                LayoutDocument::default()
            }
        }
    }

    /// Load the layout; `Ok(None)` when the file does not exist
    pub fn try_load(&self) -> Result<Option<LayoutDocument>, LayoutError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path).map_err(|source| LayoutError::Read {
            path: self.path.clone(),
            source,
        })?;
        let document = serde_json::from_str(&json).map_err(|source| LayoutError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(document))
    }

    /// Save the layout; failures are logged only. Returns whether it was written.
    pub fn save(&self, document: &LayoutDocument) -> bool {
        match self.try_save(document) {
            Ok(()) => {
                log::info!("Layout saved to {}", self.path.display());
                true
            }
            Err(err) => {
                log::error!("Error saving layout: {}", err);
                false
            }
        }
    }

    /// Write the layout through a temporary file next to the target
    pub fn try_save(&self, document: &LayoutDocument) -> Result<(), LayoutError> {
        let json = serde_json::to_string_pretty(document)?;

        let write_err = |source: std::io::Error| LayoutError::Write {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(write_err)?;

        let mut file = tempfile::Builder::new()
            .prefix(".layout-")
            .suffix(".json")
            .tempfile_in(&dir)
            .map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(write_err)?;
        file.write_all(b"\n").map_err(write_err)?;
        file.persist(&self.path).map_err(|err| write_err(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FenceColor;
    use crate::layout::document::{FenceRecord, RecordPosition, RecordSize};

    fn sample() -> LayoutDocument {
        LayoutDocument {
            fences: vec![FenceRecord {
                id: Some(1),
                position: RecordPosition { x: 50, y: 50 },
                size: RecordSize {
                    width: 300,
                    height: 200,
                },
                bg_color: FenceColor::white(),
                border_color: FenceColor::black(),
                transparency: 1.0,
                icons: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LayoutStore::new(dir.path().join("nope.json"));
        assert_eq!(store.load(), LayoutDocument::default());
        assert!(store.try_load().unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "{ this is not json").unwrap();
        let store = LayoutStore::new(&path);

        assert_eq!(store.load(), LayoutDocument::default());
        let err = store.try_load().unwrap_err();
        assert!(matches!(err, LayoutError::Parse { .. }));
    }

    #[test]
    fn test_null_document_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "null").unwrap();
        assert!(LayoutStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = LayoutStore::new(dir.path().join("nested").join("layout.json"));
        assert!(store.save(&sample()));
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn test_save_overwrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = LayoutStore::new(&path);
        assert!(store.load().is_empty());
        assert!(store.save(&LayoutDocument::default()));
        assert!(store.try_load().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_save_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        // parent is a regular file, so the directory cannot be created
        let store = LayoutStore::new(blocker.join("layout.json"));
        assert!(!store.save(&sample()));
        let err = store.try_save(&sample()).unwrap_err();
        assert!(matches!(err, LayoutError::Write { .. }));
    }
}
