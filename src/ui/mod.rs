//! Terminal front-end: blocking modal dialogs drawn with Ratatui.

mod dialogs;
mod forms;
mod helpers;
mod modal;
mod terminal;

pub use dialogs::{Dialogs, MessageKind};
pub use terminal::TerminalDialogs;

pub(crate) use helpers::surface_error;
