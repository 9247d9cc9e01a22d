//! Fence colors and transparency

use serde::{Deserialize, Serialize};

/// A color as written in the layout file, e.g. `#ffffff`
///
/// Kept verbatim: the rendering layer decides how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FenceColor(String);

impl FenceColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn white() -> Self {
        Self::new("#ffffff")
    }

    pub fn black() -> Self {
        Self::new("#000000")
    }
}

impl std::fmt::Display for FenceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual settings of a fence, authoritative regardless of any renderer state
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub background: FenceColor,
    pub border: FenceColor,
    /// Opacity in `0.0..=1.0`; stored and persisted but not interpreted here
    pub transparency: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: FenceColor::white(),
            border: FenceColor::black(),
            transparency: 1.0,
        }
    }
}
