pub mod document;
pub mod store;

pub use document::{FenceRecord, LayoutDocument, RecordPosition, RecordSize};
pub use store::{LayoutError, LayoutStore};
