//! Press/move/release drag handling shared by fences and icons
//!
//! Pointer coordinates are expected in the dragged entity's local frame, as
//! delivered by the rendering layer. Each move is measured against the point
//! captured at press time; the anchor is never advanced during a drag.

use super::geometry::GeometryBox;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Pointer offset captured when a drag starts
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub anchor_x: i32,
    pub anchor_y: i32,
    pub active: bool,
}

#[derive(Default, Debug, Clone)]
pub struct DragController {
    session: DragSession,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.active {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    /// Start (or re-anchor) a drag at the given pointer position
    pub fn on_press_start(&mut self, pointer_x: i32, pointer_y: i32) {
        self.session = DragSession {
            anchor_x: pointer_x,
            anchor_y: pointer_y,
            active: true,
        };
    }

    /// Delta to apply to the entity, or `None` when no drag is in progress
    pub fn on_pointer_move(&self, pointer_x: i32, pointer_y: i32) -> Option<(i32, i32)> {
        if !self.session.active {
            return None;
        }
        Some((
            pointer_x.saturating_sub(self.session.anchor_x),
            pointer_y.saturating_sub(self.session.anchor_y),
        ))
    }

    /// End the drag; the last applied position stays
    pub fn on_press_release(&mut self) {
        self.session = DragSession::default();
    }
}

/// An entity whose geometry follows a [`DragController`]
pub trait Draggable {
    /// Borrow the controller and the geometry it drives
    fn drag_parts(&mut self) -> (&mut DragController, &mut GeometryBox);

    fn press_start(&mut self, pointer_x: i32, pointer_y: i32) {
        self.drag_parts().0.on_press_start(pointer_x, pointer_y);
    }

    /// Apply a pointer move; returns whether the geometry changed
    fn pointer_move(&mut self, pointer_x: i32, pointer_y: i32) -> bool {
        let (drag, geometry) = self.drag_parts();
        match drag.on_pointer_move(pointer_x, pointer_y) {
            Some((dx, dy)) => {
                *geometry = geometry.move_by(dx, dy);
                dx != 0 || dy != 0
            }
            None => false,
        }
    }

    fn press_release(&mut self) {
        self.drag_parts().0.on_press_release();
    }
}
