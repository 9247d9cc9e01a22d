//! Desktop shortcut discovery
//!
//! Icons only reference an image path; extracting the real icon out of a
//! shortcut is left to the rendering side, so every shortcut gets the
//! configured placeholder.

use std::path::{Path, PathBuf};

use crate::fences::IconId;

/// Shortcut file extensions picked up from the desktop
const SHORTCUT_EXTENSIONS: [&str; 2] = ["lnk", "url"];

/// A discovered shortcut and the image to show for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    pub id: IconId,
    pub image: PathBuf,
}

/// Anything that can list the icons to place in fences
pub trait IconProvider {
    fn icons(&self) -> Vec<IconSource>;
}

/// Lists `.lnk` and `.url` files in a folder
#[derive(Debug, Clone)]
pub struct DesktopShortcuts {
    dir: PathBuf,
    placeholder: PathBuf,
}

impl DesktopShortcuts {
    pub fn new(dir: impl Into<PathBuf>, placeholder: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn is_shortcut(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SHORTCUT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

impl IconProvider for DesktopShortcuts {
    fn icons(&self) -> Vec<IconSource> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Cannot list {}: {}", self.dir.display(), err);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_shortcut(path))
            .collect();
        paths.sort();

        log::info!("Found {} shortcut(s) in {}", paths.len(), self.dir.display());
        paths
            .into_iter()
            .map(|path| IconSource {
                id: IconId::from_path(&path),
                image: self.placeholder.clone(),
            })
            .collect()
    }
}
