use anyhow::Result;
use log::error;

use crate::config::AppConfig;
use crate::db::open_store;
use crate::logging::init_file_logger;
use crate::menu::run_menu;
use crate::ui::{surface_error, Dialogs, MessageKind, TerminalDialogs};

/// Bring up logging and the terminal, run the program, then hand the terminal
/// back to the shell whatever the outcome.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Err(err) = init_file_logger(config.log_file) {
        eprintln!("running without a log file: {err:#}");
    }

    let mut dialogs = TerminalDialogs::start()?;
    let result = run_with(config, &mut dialogs);
    let restored = dialogs.finish();
    result.and(restored)
}

/// Open the store, then drive the menu until the user exits. A store that
/// cannot be opened is reported in a dialog and returned as the error; the
/// menu never starts in that case.
pub(crate) fn run_with(config: &AppConfig, dialogs: &mut dyn Dialogs) -> Result<()> {
    match open_store(config.db_file, config.schema) {
        Ok(conn) => run_menu(conn, dialogs, &config.menu),
        Err(err) => {
            error!("storage setup failed: {err:#}");
            dialogs.message(
                "Database Error",
                &format!("A database error occurred: {}", surface_error(&err)),
                MessageKind::Error,
            )?;
            Err(err)
        }
    }
}
