use std::fmt::Write as _;

use crate::domain::Draggable;
use crate::fences::{FenceId, FenceRegistry, Icon, IconId};
use crate::icons::IconProvider;
use crate::layout::LayoutStore;
use crate::session::messages::{DragAction, DragTarget, FenceMsg, Msg};

/// What the event loop should do after a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Live state of one run: fences, icons and where the layout is saved
#[derive(Debug)]
pub struct Session {
    registry: FenceRegistry,
    icons: Vec<Icon>,
    store: LayoutStore,
    new_fence_origin: (i32, i32),
}

impl Session {
    /// Load the saved layout, rebuild the fences and route every discovered
    /// icon to the first fence
    pub fn start(
        store: LayoutStore,
        provider: &dyn IconProvider,
        new_fence_origin: (i32, i32),
    ) -> Self {
        let document = store.load();
        let mut registry = FenceRegistry::new();
        registry.bootstrap(Some(&document));

        let mut session = Self {
            registry,
            icons: Vec::new(),
            store,
            new_fence_origin,
        };
        for source in provider.icons() {
            if session.icon(&source.id).is_some() {
                log::warn!("Duplicate icon {}, skipping", source.id);
                continue;
            }
            let mut icon = Icon::new(source.id, source.image);
            if let Err(err) = session.registry.assign_icon(&mut icon, None) {
                log::warn!("Could not place icon {}: {}", icon.id(), err);
            }
            session.icons.push(icon);
        }
        session
    }

    pub fn registry(&self) -> &FenceRegistry {
        &self.registry
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn icon(&self, id: &IconId) -> Option<&Icon> {
        self.icons.iter().find(|icon| icon.id() == id)
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Handle one message to completion
    pub fn update(&mut self, msg: Msg) -> Control {
        match msg {
            Msg::Drag(target, action) => self.handle_drag(target, action),
            Msg::Fence(msg) => self.handle_fence(msg),
            Msg::SaveLayout => {
                self.save();
            }
            Msg::List => println!("{}", self.describe()),
            Msg::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Write the current layout; failures are only logged
    pub fn save(&self) -> bool {
        self.store.save(&self.registry.export_layout())
    }

    fn handle_drag(&mut self, target: DragTarget, action: DragAction) {
        match target {
            DragTarget::Fence(id) => match self.registry.get_mut(id) {
                Some(fence) => apply_drag(fence, action),
                None => log::warn!("Drag on unknown fence {}", id),
            },
            DragTarget::Icon(id) => match self.icons.iter_mut().find(|icon| *icon.id() == id) {
                Some(icon) => apply_drag(icon, action),
                None => log::warn!("Drag on unknown icon {}", id),
            },
        }
    }

    fn handle_fence(&mut self, msg: FenceMsg) {
        match msg {
            FenceMsg::New => {
                let (x, y) = self.new_fence_origin;
                self.new_fence(x, y);
            }
            FenceMsg::NewAt(x, y) => self.new_fence(x, y),
            FenceMsg::Remove(id) => self.remove_fence(id),
            FenceMsg::AssignIcon(icon_id, fence) => {
                let Some(icon) = self.icons.iter_mut().find(|icon| *icon.id() == icon_id) else {
                    log::warn!("Cannot assign unknown icon {}", icon_id);
                    return;
                };
                if let Err(err) = self.registry.assign_icon(icon, fence) {
                    log::warn!("Could not assign icon {}: {}", icon_id, err);
                }
            }
        }
    }

    fn new_fence(&mut self, x: i32, y: i32) {
        if let Err(err) = self.registry.create_default_fence(x, y) {
            log::error!("Could not create fence: {}", err);
        }
    }

    fn remove_fence(&mut self, id: FenceId) {
        if self.registry.remove_fence(id).is_none() {
            log::warn!("Cannot remove unknown fence {}", id);
            return;
        }
        for icon in self.icons.iter_mut().filter(|icon| icon.owner() == Some(id)) {
            icon.detach();
        }
    }

    /// Human-readable listing of fences and icons
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for fence in self.registry.iter() {
            let g = fence.geometry();
            let _ = writeln!(
                out,
                "fence {} at ({}, {}) size {}x{} bg {} border {} icons {}",
                fence.id(),
                g.x(),
                g.y(),
                g.width(),
                g.height(),
                fence.appearance().background,
                fence.appearance().border,
                fence.icons().len()
            );
        }
        for icon in &self.icons {
            let (x, y) = icon.geometry().position();
            let owner = icon
                .owner()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(out, "icon {} at ({}, {}) fence {}", icon.id(), x, y, owner);
        }
        out.trim_end().to_string()
    }
}

fn apply_drag(entity: &mut impl Draggable, action: DragAction) {
    match action {
        DragAction::Start(x, y) => entity.press_start(x, y),
        DragAction::Move(x, y) => {
            entity.pointer_move(x, y);
        }
        DragAction::End => entity.press_release(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeometryBox;
    use crate::icons::IconSource;
    use std::path::PathBuf;

    struct FixedIcons(Vec<&'static str>);

    impl IconProvider for FixedIcons {
        fn icons(&self) -> Vec<IconSource> {
            self.0
                .iter()
                .map(|name| IconSource {
                    id: IconId::new(*name),
                    image: PathBuf::from("placeholder.png"),
                })
                .collect()
        }
    }

    fn start(dir: &tempfile::TempDir, names: Vec<&'static str>) -> Session {
        let store = LayoutStore::new(dir.path().join("layout.json"));
        Session::start(store, &FixedIcons(names), (50, 50))
    }

    #[test]
    fn test_start_without_layout_routes_icons_to_default_fence() {
        let dir = tempfile::tempdir().unwrap();
        let session = start(&dir, vec!["a.lnk", "b.url", "a.lnk"]);

        assert_eq!(session.registry().len(), 1);
        assert_eq!(session.icons().len(), 2);
        let fence = session.registry().get(FenceId(1)).unwrap();
        assert_eq!(fence.icons(), &[IconId::new("a.lnk"), IconId::new("b.url")]);
        assert!(session.icons().iter().all(|i| i.owner() == Some(FenceId(1))));
    }

    #[test]
    fn test_drag_messages_move_fence_and_icon() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = start(&dir, vec!["a.lnk"]);
        let fence = DragTarget::Fence(FenceId(1));
        let icon = DragTarget::Icon(IconId::new("a.lnk"));

        session.update(Msg::press(fence.clone(), 10, 10));
        session.update(Msg::pointer_move(fence.clone(), 15, 12));
        session.update(Msg::release(fence.clone()));
        session.update(Msg::pointer_move(fence, 100, 100));
        assert_eq!(
            session.registry().get(FenceId(1)).unwrap().geometry().position(),
            (55, 52)
        );

        session.update(Msg::press(icon.clone(), 0, 0));
        session.update(Msg::pointer_move(icon.clone(), -30, 40));
        session.update(Msg::release(icon));
        let moved = session.icon(&IconId::new("a.lnk")).unwrap();
        assert_eq!(moved.geometry().position(), (70, 140));
        assert_eq!(moved.owner(), Some(FenceId(1)));
    }

    #[test]
    fn test_unknown_targets_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = start(&dir, vec![]);
        let control = session.update(Msg::press(DragTarget::Fence(FenceId(9)), 1, 1));
        assert_eq!(control, Control::Continue);
        session.update(Msg::assign_icon(IconId::new("nope"), None));
        session.update(Msg::remove_fence(FenceId(9)));
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_new_assign_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = start(&dir, vec!["a.lnk"]);
        session.update(Msg::new_fence());
        session.update(Msg::new_fence_at(400, 10));
        assert_eq!(session.registry().len(), 3);
        assert_eq!(
            session.registry().get(FenceId(2)).unwrap().geometry().position(),
            (50, 50)
        );

        let a = IconId::new("a.lnk");
        session.update(Msg::assign_icon(a.clone(), Some(FenceId(3))));
        assert_eq!(session.icon(&a).unwrap().owner(), Some(FenceId(3)));
        assert!(session.registry().get(FenceId(1)).unwrap().icons().is_empty());

        session.update(Msg::remove_fence(FenceId(3)));
        assert_eq!(session.icon(&a).unwrap().owner(), None);
        assert!(session.registry().get(FenceId(3)).is_none());
    }

    #[test]
    fn test_save_and_restart_restores_fences() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = start(&dir, vec!["a.lnk"]);
        session.update(Msg::new_fence_at(400, 10));
        let fence = DragTarget::Fence(FenceId(2));
        session.update(Msg::press(fence.clone(), 5, 5));
        session.update(Msg::pointer_move(fence.clone(), 25, 5));
        session.update(Msg::release(fence));
        session.update(Msg::assign_icon(IconId::new("a.lnk"), Some(FenceId(2))));
        assert_eq!(session.update(Msg::SaveLayout), Control::Continue);

        let saved = session.store().try_load().unwrap().unwrap();
        assert_eq!(saved, session.registry().export_layout());

        let restarted = start(&dir, vec!["a.lnk"]);
        assert_eq!(restarted.registry().export_layout(), saved);
        assert_eq!(
            restarted.registry().get(FenceId(2)).unwrap().geometry().position(),
            (420, 10)
        );
        // membership is not persisted: icons land in the first fence again
        assert_eq!(
            restarted.icon(&IconId::new("a.lnk")).unwrap().owner(),
            Some(FenceId(1))
        );
    }

    #[test]
    fn test_corrupt_layout_starts_with_default_fence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("layout.json"), "not json").unwrap();
        let session = start(&dir, vec![]);
        assert_eq!(session.registry().len(), 1);
        let fence = session.registry().get(FenceId(1)).unwrap();
        assert_eq!(fence.geometry(), GeometryBox::new(50, 50, 300, 200).unwrap());

        // the next save replaces the unreadable file
        assert!(session.save());
        assert!(!session.store().load().is_empty());
    }

    #[test]
    fn test_negative_fence_id_starts_with_default_fence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("layout.json"),
            r#"{"fences":[{"id":-4,"position":{"x":7,"y":7},"size":{"width":90,"height":90}}]}"#,
        )
        .unwrap();
        let session = start(&dir, vec![]);
        assert_eq!(session.registry().len(), 1);
        let fence = session.registry().get(FenceId(1)).unwrap();
        assert_eq!(fence.geometry().position(), (50, 50));
    }

    #[test]
    fn test_quit_and_describe() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = start(&dir, vec!["a.lnk"]);
        let listing = session.describe();
        assert!(listing.contains("fence 1 at (50, 50) size 300x200"));
        assert!(listing.contains("icon a.lnk at (100, 100) fence 1"));
        assert_eq!(session.update(Msg::Quit), Control::Quit);
    }
}
