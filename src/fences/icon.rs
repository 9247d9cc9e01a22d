//! Draggable desktop shortcut icons

use std::num::NonZeroU16;
use std::path::{Path, PathBuf};

use crate::domain::{DragController, Draggable, GeometryBox};

use super::FenceId;

/// Edge length of the square icon footprint
pub const ICON_SIZE: NonZeroU16 = NonZeroU16::new(64).unwrap();

/// Where freshly discovered icons are placed before any drag
pub const ICON_START_POSITION: (i32, i32) = (100, 100);

/// Identifier of an icon: the shortcut's path, unique per desktop entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Icon {
    id: IconId,
    /// Image handed out by the icon provider; never opened here
    image: PathBuf,
    geometry: GeometryBox,
    owner: Option<FenceId>,
    drag: DragController,
}

impl Icon {
    pub fn new(id: IconId, image: PathBuf) -> Self {
        let (x, y) = ICON_START_POSITION;
        Self {
            id,
            image,
            geometry: GeometryBox::square(x, y, ICON_SIZE),
            owner: None,
            drag: DragController::new(),
        }
    }

    pub fn id(&self) -> &IconId {
        &self.id
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn geometry(&self) -> GeometryBox {
        self.geometry
    }

    pub fn owner(&self) -> Option<FenceId> {
        self.owner
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Record the owning fence
    ///
    /// Only the back-reference changes. Removing the id from the previous
    /// owner's membership and adding it to the new one is up to the caller;
    /// [`FenceRegistry::assign_icon`](super::FenceRegistry::assign_icon)
    /// does both.
    pub fn attach_to(&mut self, fence: FenceId) {
        self.owner = Some(fence);
    }

    pub fn detach(&mut self) {
        self.owner = None;
    }
}

impl Draggable for Icon {
    fn drag_parts(&mut self) -> (&mut DragController, &mut GeometryBox) {
        (&mut self.drag, &mut self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon() -> Icon {
        Icon::new(
            IconId::new("/home/me/Desktop/Editor.lnk"),
            PathBuf::from("assets/icons/placeholder.png"),
        )
    }

    #[test]
    fn test_new_icon_is_unowned_at_start_position() {
        let icon = icon();
        assert_eq!(icon.owner(), None);
        assert_eq!(icon.geometry().position(), ICON_START_POSITION);
        assert_eq!(icon.geometry().width(), 64);
        assert_eq!(icon.geometry().height(), 64);
    }

    #[test]
    fn test_attach_and_detach() {
        let mut icon = icon();
        icon.attach_to(FenceId(3));
        assert_eq!(icon.owner(), Some(FenceId(3)));
        icon.attach_to(FenceId(4));
        assert_eq!(icon.owner(), Some(FenceId(4)));
        icon.detach();
        assert_eq!(icon.owner(), None);
    }

    #[test]
    fn test_drag_moves_icon_but_keeps_owner() {
        let mut icon = icon();
        icon.attach_to(FenceId(1));
        icon.press_start(32, 32);
        icon.pointer_move(532, 32);
        icon.press_release();
        assert_eq!(icon.geometry().position(), (600, 100));
        assert_eq!(icon.geometry().width(), 64);
        assert_eq!(icon.owner(), Some(FenceId(1)));
    }
}
