//! Fence collection, id allocation and icon routing

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::{Appearance, GeometryBox, GeometryError};
use crate::layout::{FenceRecord, LayoutDocument};

use super::{Fence, FenceId, Icon};

pub const DEFAULT_FENCE_WIDTH: i32 = 300;
pub const DEFAULT_FENCE_HEIGHT: i32 = 200;

/// Position of the fence created when there is no saved layout
pub const DEFAULT_FENCE_ORIGIN: (i32, i32) = (50, 50);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no fence available to receive the icon")]
    NoFenceAvailable,
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),
    #[error("fence id {0} leaves no room for further ids")]
    IdExhausted(u32),
}

/// Owner of all fences
///
/// Fences are kept in creation order next to an id index. Default icon
/// routing targets the first fence in that order, which is not necessarily
/// the one with the lowest id once records have been rehydrated.
#[derive(Debug)]
pub struct FenceRegistry {
    order: Vec<FenceId>,
    fences: HashMap<FenceId, Fence>,
    next_id: u32,
}

impl Default for FenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FenceRegistry {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            fences: HashMap::new(),
            next_id: 1,
        }
    }

    /// Id the next [`create_fence`](Self::create_fence) call will use
    pub fn next_id(&self) -> FenceId {
        FenceId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: FenceId) -> Option<&Fence> {
        self.fences.get(&id)
    }

    pub fn get_mut(&mut self, id: FenceId) -> Option<&mut Fence> {
        self.fences.get_mut(&id)
    }

    /// Fences in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Fence> {
        self.order.iter().filter_map(|id| self.fences.get(id))
    }

    /// Create a fence with a freshly allocated id
    pub fn create_fence(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        appearance: Appearance,
    ) -> Result<&mut Fence, RegistryError> {
        let geometry = GeometryBox::new(x, y, width, height)?;
        let id = FenceId(self.next_id);
        self.next_id = successor(id)?;
        log::info!("Created fence {} at ({}, {})", id, x, y);
        Ok(self.insert(Fence::new(id, geometry, appearance)))
    }

    /// Create a default-sized, default-colored fence at `(x, y)`
    pub fn create_default_fence(&mut self, x: i32, y: i32) -> Result<&mut Fence, RegistryError> {
        self.create_fence(
            x,
            y,
            DEFAULT_FENCE_WIDTH,
            DEFAULT_FENCE_HEIGHT,
            Appearance::default(),
        )
    }

    /// Rebuild a fence from a persisted record
    ///
    /// The record's id is kept when present and the counter moves past it,
    /// so later [`create_fence`](Self::create_fence) calls never collide.
    /// A record id that is already taken replaces that fence in place; an id
    /// with no successor (`u32::MAX`) is rejected.
    pub fn create_fence_from_record(
        &mut self,
        record: &FenceRecord,
    ) -> Result<&mut Fence, RegistryError> {
        let geometry = GeometryBox::new(
            record.position.x,
            record.position.y,
            record.size.width,
            record.size.height,
        )?;
        let id = match record.id {
            Some(id) if id >= 1 => FenceId(id),
            Some(_) => {
                log::warn!("Ignoring invalid fence id 0 in layout record");
                FenceId(self.next_id)
            }
            None => FenceId(self.next_id),
        };
        self.next_id = self.next_id.max(successor(id)?);

        let appearance = Appearance {
            background: record.bg_color.clone(),
            border: record.border_color.clone(),
            transparency: record.transparency,
        };
        if self.fences.contains_key(&id) {
            log::warn!("Layout contains fence {} twice, keeping the last one", id);
        }
        Ok(self.insert(Fence::new(id, geometry, appearance)))
    }

    /// Populate the registry from a loaded layout
    ///
    /// Records are rehydrated in order; unusable ones are skipped. When no
    /// fence results, a single default fence is created, so the registry is
    /// never left empty.
    pub fn bootstrap(&mut self, document: Option<&LayoutDocument>) {
        for record in document.map(|d| d.fences.as_slice()).unwrap_or_default() {
            if let Err(err) = self.create_fence_from_record(record) {
                log::warn!("Skipping fence record {:?}: {}", record.id, err);
            }
        }

        if self.is_empty() {
            let (x, y) = DEFAULT_FENCE_ORIGIN;
            if let Err(err) = self.create_default_fence(x, y) {
                // constant geometry is valid
                log::error!("Could not create default fence: {}", err);
            }
        }
    }

    /// Put an icon into a fence
    ///
    /// Targets `fence` when it names a known fence, the first-created fence
    /// otherwise. The icon is taken out of its previous owner's membership
    /// first, so it is never listed by two fences.
    pub fn assign_icon(
        &mut self,
        icon: &mut Icon,
        fence: Option<FenceId>,
    ) -> Result<FenceId, RegistryError> {
        let target = match fence.filter(|id| self.fences.contains_key(id)) {
            Some(id) => id,
            None => {
                if let Some(id) = fence {
                    log::debug!("Unknown fence {}, routing {} to the first fence", id, icon.id());
                }
                *self.order.first().ok_or(RegistryError::NoFenceAvailable)?
            }
        };

        if let Some(previous) = icon.owner().filter(|prev| *prev != target) {
            if let Some(old) = self.fences.get_mut(&previous) {
                old.remove_icon(icon.id());
            }
        }
        if let Some(fence) = self.fences.get_mut(&target) {
            fence.add_icon(icon.id().clone());
        }
        icon.attach_to(target);
        log::debug!("Assigned {} to fence {}", icon.id(), target);
        Ok(target)
    }

    /// Remove a fence; its member icons keep a stale owner until the caller
    /// detaches them
    pub fn remove_fence(&mut self, id: FenceId) -> Option<Fence> {
        let fence = self.fences.remove(&id)?;
        self.order.retain(|member| *member != id);
        log::info!("Removed fence {}", id);
        Some(fence)
    }

    /// Snapshot of all fences for persisting, in creation order
    pub fn export_layout(&self) -> LayoutDocument {
        LayoutDocument {
            fences: self.iter().map(Fence::to_record).collect(),
        }
    }

    fn insert(&mut self, fence: Fence) -> &mut Fence {
        let id = fence.id();
        match self.fences.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(fence);
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                self.order.push(id);
                slot.insert(fence)
            }
        }
    }
}

/// Id that must follow `id` so the counter stays above every allocated id
fn successor(id: FenceId) -> Result<u32, RegistryError> {
    id.0.checked_add(1).ok_or(RegistryError::IdExhausted(id.0))
}
