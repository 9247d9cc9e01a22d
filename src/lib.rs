//! Desktop fences: draggable overlay regions that group shortcut icons,
//! with the arrangement saved to and restored from a JSON layout file.
//!
//! The windowing layer is not part of this crate. It renders fences and
//! icons from their geometry and appearance, and feeds pointer events back
//! through [`session::messages::Msg`] or directly through
//! [`domain::Draggable`].

pub mod config;
pub mod core;
pub mod domain;
pub mod fences;
pub mod icons;
pub mod layout;
pub mod session;
