//! On-disk shape of the layout file

use serde::{Deserialize, Serialize};

use crate::domain::FenceColor;

/// All persisted fences, in registry order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub fences: Vec<FenceRecord>,
}

impl LayoutDocument {
    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSize {
    pub width: i32,
    pub height: i32,
}

/// One persisted fence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceRecord {
    /// Absent in hand-written files; the registry allocates one then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub position: RecordPosition,
    pub size: RecordSize,
    #[serde(default = "FenceColor::white")]
    pub bg_color: FenceColor,
    #[serde(default = "FenceColor::black")]
    pub border_color: FenceColor,
    #[serde(default = "default_transparency")]
    pub transparency: f64,
    /// Reserved for icon membership; always written empty and ignored on load
    #[serde(default)]
    pub icons: Vec<String>,
}

fn default_transparency() -> f64 {
    1.0
}
