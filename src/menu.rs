//! The main menu loop shared by both programs.

use anyhow::Result;
use log::{info, warn};
use rusqlite::Connection;

use crate::records::WriteOutcome;
use crate::ui::{Dialogs, MessageKind};

const EXIT_LABEL: &str = "Exit";

/// What a menu button runs.
#[derive(Copy, Clone)]
pub enum MenuAction {
    Write(fn(&Connection, &mut dyn Dialogs) -> Result<WriteOutcome>),
    View(fn(&Connection, &mut dyn Dialogs) -> Result<()>),
}

#[derive(Copy, Clone)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

/// A button menu. "Exit" is appended after `entries` when shown.
pub struct MenuSpec {
    pub title: &'static str,
    pub prompt: &'static str,
    pub entries: &'static [MenuEntry],
}

impl MenuSpec {
    fn labels(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|entry| entry.label)
            .chain(std::iter::once(EXIT_LABEL))
            .collect()
    }
}

/// Show the menu and dispatch actions until the user picks "Exit" or closes
/// the menu. The connection is closed on the way out and a farewell shown
/// once.
pub fn run_menu(conn: Connection, dialogs: &mut dyn Dialogs, spec: &MenuSpec) -> Result<()> {
    let labels = spec.labels();

    loop {
        let choice = dialogs.choose(spec.title, spec.prompt, &labels)?;
        let Some(entry) = choice.and_then(|idx| spec.entries.get(idx)) else {
            info!("leaving menu ({})", if choice.is_some() { "exit" } else { "closed" });
            break;
        };

        info!("menu: {}", entry.label);
        match entry.action {
            MenuAction::Write(action) => {
                let outcome = action(&conn, dialogs)?;
                info!("{}: {:?}", entry.label, outcome);
            }
            MenuAction::View(action) => action(&conn, dialogs)?,
        }
    }

    if let Err((_, err)) = conn.close() {
        warn!("failed to close database cleanly: {err}");
    }
    dialogs.message("Exiting Program", "Goodbye!", MessageKind::Info)
}
