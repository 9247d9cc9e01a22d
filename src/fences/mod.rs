//! Fences, the icons they group, and the registry that owns them

pub mod fence;
pub mod icon;
pub mod registry;

pub use fence::Fence;
pub use icon::{Icon, IconId};
pub use registry::{FenceRegistry, RegistryError};

/// Fence identifier, unique within a registry and never below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FenceId(pub u32);

impl std::fmt::Display for FenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
