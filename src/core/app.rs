//! Process entry: configuration, session startup and the command loop

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::DeskfenceConfig;
use crate::icons::DesktopShortcuts;
use crate::layout::LayoutStore;
use crate::session::shortcuts::{USAGE, parse_command};
use crate::session::state::{Control, Session};

pub fn run() -> Result<()> {
    let config = DeskfenceConfig::load();
    let layout_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.layout_path());

    let provider = DesktopShortcuts::new(config.desktop_path(), config.placeholder_icon.clone());
    let mut session = Session::start(
        LayoutStore::new(layout_path),
        &provider,
        config.new_fence_origin,
    );
    log::info!(
        "Started with {} fence(s) and {} icon(s) from {}",
        session.registry().len(),
        session.icons().len(),
        provider.dir().display()
    );

    let stdin = std::io::stdin();
    run_loop(&mut session, stdin.lock(), config.save_on_exit)
}

/// Dispatch commands until `quit` or end of input
fn run_loop(session: &mut Session, input: impl BufRead, save_on_exit: bool) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(msg) => {
                if session.update(msg) == Control::Quit {
                    break;
                }
            }
            None => eprintln!("{}", USAGE),
        }
    }

    if save_on_exit {
        session.save();
    }
    Ok(())
}
