//! A single fence: a draggable region grouping icons

use crate::domain::{Appearance, DragController, Draggable, GeometryBox};
use crate::layout::{FenceRecord, RecordPosition, RecordSize};

use super::{FenceId, IconId};

#[derive(Debug, Clone)]
pub struct Fence {
    id: FenceId,
    geometry: GeometryBox,
    appearance: Appearance,
    /// Member icons in the order they were added
    icons: Vec<IconId>,
    drag: DragController,
}

impl Fence {
    pub fn new(id: FenceId, geometry: GeometryBox, appearance: Appearance) -> Self {
        Self {
            id,
            geometry,
            appearance,
            icons: Vec::new(),
            drag: DragController::new(),
        }
    }

    pub fn id(&self) -> FenceId {
        self.id
    }

    pub fn geometry(&self) -> GeometryBox {
        self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut GeometryBox {
        &mut self.geometry
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    pub fn icons(&self) -> &[IconId] {
        &self.icons
    }

    pub fn contains_icon(&self, icon: &IconId) -> bool {
        self.icons.contains(icon)
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Append an icon to the membership; adding a member again does nothing
    pub fn add_icon(&mut self, icon: IconId) {
        if !self.contains_icon(&icon) {
            self.icons.push(icon);
        }
    }

    /// Drop an icon from the membership if present
    pub fn remove_icon(&mut self, icon: &IconId) {
        self.icons.retain(|member| member != icon);
    }

    /// Persisted form of the fence's current state
    ///
    /// Membership is not written yet: `icons` is always empty.
    pub fn to_record(&self) -> FenceRecord {
        FenceRecord {
            id: Some(self.id.0),
            position: RecordPosition {
                x: self.geometry.x(),
                y: self.geometry.y(),
            },
            size: RecordSize {
                width: self.geometry.width(),
                height: self.geometry.height(),
            },
            bg_color: self.appearance.background.clone(),
            border_color: self.appearance.border.clone(),
            transparency: self.appearance.transparency,
            icons: Vec::new(),
        }
    }
}

impl Draggable for Fence {
    fn drag_parts(&mut self) -> (&mut DragController, &mut GeometryBox) {
        (&mut self.drag, &mut self.geometry)
    }
}
