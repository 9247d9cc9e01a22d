//! Message types for a fence session
//!
//! Every input the session reacts to, whether it comes from the pointer, a
//! hotkey or a typed command, is turned into a [`Msg`] first.

use crate::fences::{FenceId, IconId};

// ============================================================================
// Drag Types
// ============================================================================

/// Pointer action in the dragged entity's local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// Button pressed at position
    Start(i32, i32),
    /// Pointer moved to position while pressed
    Move(i32, i32),
    /// Button released
    End,
}

/// Entity receiving a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Fence(FenceId),
    Icon(IconId),
}

// ============================================================================
// Fence Management Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceMsg {
    /// Create a fence at the configured origin (new-fence hotkey)
    New,
    /// Create a fence at an explicit position
    NewAt(i32, i32),
    /// Remove a fence, leaving its icons unowned
    Remove(FenceId),
    /// Move an icon into a fence; `None` means the first fence
    AssignIcon(IconId, Option<FenceId>),
}

// ============================================================================
// Main Message Enum
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Pointer events routed to a fence or an icon
    Drag(DragTarget, DragAction),
    /// Fence creation, removal and icon routing
    Fence(FenceMsg),
    /// Write the current layout
    SaveLayout,
    /// Print fences and icons
    List,
    /// Leave the event loop
    Quit,
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl Msg {
    pub fn press(target: DragTarget, x: i32, y: i32) -> Self {
        Self::Drag(target, DragAction::Start(x, y))
    }

    pub fn pointer_move(target: DragTarget, x: i32, y: i32) -> Self {
        Self::Drag(target, DragAction::Move(x, y))
    }

    pub fn release(target: DragTarget) -> Self {
        Self::Drag(target, DragAction::End)
    }

    pub fn new_fence() -> Self {
        Self::Fence(FenceMsg::New)
    }

    pub fn new_fence_at(x: i32, y: i32) -> Self {
        Self::Fence(FenceMsg::NewAt(x, y))
    }

    pub fn remove_fence(id: FenceId) -> Self {
        Self::Fence(FenceMsg::Remove(id))
    }

    pub fn assign_icon(icon: IconId, fence: Option<FenceId>) -> Self {
        Self::Fence(FenceMsg::AssignIcon(icon, fence))
    }
}
