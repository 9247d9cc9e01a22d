//! Pure domain types with minimal dependencies
//!
//! Nothing here touches the filesystem or knows about fences as a
//! collection; the registry and session build on top of these.

pub mod appearance;
pub mod drag;
pub mod geometry;

pub use appearance::*;
pub use drag::*;
pub use geometry::*;
