use crate::fences::{FenceId, IconId};
use crate::session::messages::{DragTarget, Msg};

/// Help text printed for unrecognised input
pub const USAGE: &str = "\
commands:
  n | new [x y]                 create a fence
  rm <fence>                    remove a fence
  press <target> <x> <y>        start dragging
  move <target> <x> <y>         drag to local position
  release <target>              stop dragging
  assign <fence|-> <icon>       put an icon into a fence (- = first fence)
  s | save                      write the layout
  ls                            list fences and icons
  q | quit                      exit
targets: fence <id> | icon <path>";

/// Map one line of input to a message
pub fn parse_command(line: &str) -> Option<Msg> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (&command, args) = words.split_first()?;

    match (command, args) {
        ("n" | "new", []) => Some(Msg::new_fence()),
        ("n" | "new", [x, y]) => Some(Msg::new_fence_at(x.parse().ok()?, y.parse().ok()?)),
        ("rm" | "remove", [id]) => Some(Msg::remove_fence(parse_fence(id)?)),
        ("press", [target @ .., x, y]) => {
            Some(Msg::press(parse_target(target)?, x.parse().ok()?, y.parse().ok()?))
        }
        ("move", [target @ .., x, y]) => Some(Msg::pointer_move(
            parse_target(target)?,
            x.parse().ok()?,
            y.parse().ok()?,
        )),
        ("release", target) => Some(Msg::release(parse_target(target)?)),
        ("assign", [fence, icon @ ..]) if !icon.is_empty() => {
            let fence = match *fence {
                "-" => None,
                id => Some(parse_fence(id)?),
            };
            Some(Msg::assign_icon(IconId::new(icon.join(" ")), fence))
        }
        ("s" | "save", []) => Some(Msg::SaveLayout),
        ("ls" | "list", []) => Some(Msg::List),
        ("q" | "quit" | "exit", []) => Some(Msg::Quit),
        _ => None,
    }
}

fn parse_fence(word: &str) -> Option<FenceId> {
    word.parse::<u32>().ok().filter(|id| *id >= 1).map(FenceId)
}

fn parse_target(words: &[&str]) -> Option<DragTarget> {
    match words {
        ["fence", id] => Some(DragTarget::Fence(parse_fence(id)?)),
        ["icon", path @ ..] if !path.is_empty() => {
            Some(DragTarget::Icon(IconId::new(path.join(" "))))
        }
        _ => None,
    }
}
