use anyhow::Result;

use crate::input::FieldSpec;

/// Tone of a message dialog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Blocking dialogs the record actions talk to. Each call returns only once
/// the user has dealt with the dialog. `Ok(None)` means the dialog was
/// dismissed without an answer; `Err` is reserved for the dialog machinery
/// itself failing (terminal I/O).
pub trait Dialogs {
    /// Button dialog. Returns the index of the chosen button.
    fn choose(&mut self, title: &str, prompt: &str, choices: &[&str]) -> Result<Option<usize>>;

    /// Multi-field entry form. Returns one raw string per field, in order.
    fn form(&mut self, title: &str, prompt: &str, fields: &[FieldSpec])
        -> Result<Option<Vec<String>>>;

    fn message(&mut self, title: &str, text: &str, kind: MessageKind) -> Result<()>;

    /// Read-only, scrollable text display.
    fn text(&mut self, title: &str, heading: &str, body: &str) -> Result<()>;
}
