use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::dialogs::{Dialogs, MessageKind};
use super::forms::FormState;
use super::modal::{ButtonDialog, FormDialog, MessageDialog, Modal, Resolution, TextViewer};
use crate::input::FieldSpec;

/// `Dialogs` backed by a full-screen Ratatui terminal. Every call takes over
/// the screen with a single modal and blocks until the user resolves it.
pub struct TerminalDialogs {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalDialogs {
    /// Switch the terminal into raw mode on the alternate screen. If anything
    /// after raw mode fails, the terminal is restored before returning. A
    /// panic hook restores it too.
    pub fn start() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let dialogs = undo_on_error(Self::enter_alternate_screen(), || {
            let _ = restore_terminal();
        })?;
        install_panic_hook();
        Ok(dialogs)
    }

    fn enter_alternate_screen() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to create terminal backend")?;
        Ok(Self { terminal })
    }

    /// Give the terminal back to the shell.
    pub fn finish(mut self) -> Result<()> {
        restore_terminal()?;
        self.terminal
            .show_cursor()
            .context("failed to restore cursor visibility")
    }

    /// Draw `modal` and feed it key presses until it resolves.
    fn run_modal(&mut self, mut modal: Modal) -> Result<Resolution> {
        self.terminal.clear().context("failed to clear terminal")?;
        loop {
            self.terminal
                .draw(|frame| modal.draw(frame))
                .context("failed to draw frame")?;

            if event::poll(Duration::from_millis(250)).context("event polling failed")? {
                if let Event::Key(key_event) = event::read().context("failed to read event")? {
                    if key_event.kind == KeyEventKind::Press {
                        if let Some(resolution) = modal.handle_key(key_event) {
                            return Ok(resolution);
                        }
                    }
                }
            }
        }
    }
}

/// Leave raw mode and the alternate screen, showing the cursor again.
fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
        .context("failed to leave alternate screen")
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Run `undo` when `result` is an error, then pass the result through.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

impl Dialogs for TerminalDialogs {
    fn choose(&mut self, title: &str, prompt: &str, choices: &[&str]) -> Result<Option<usize>> {
        let modal = Modal::Buttons(ButtonDialog {
            title: title.to_string(),
            prompt: prompt.to_string(),
            choices: choices.iter().map(|choice| choice.to_string()).collect(),
            selected: 0,
        });
        match self.run_modal(modal)? {
            Resolution::Chosen(idx) => Ok(Some(idx)),
            _ => Ok(None),
        }
    }

    fn form(
        &mut self,
        title: &str,
        prompt: &str,
        fields: &[FieldSpec],
    ) -> Result<Option<Vec<String>>> {
        let modal = Modal::Form(FormDialog {
            title: title.to_string(),
            prompt: prompt.to_string(),
            form: FormState::new(fields),
        });
        match self.run_modal(modal)? {
            Resolution::Submitted(values) => Ok(Some(values)),
            _ => Ok(None),
        }
    }

    fn message(&mut self, title: &str, text: &str, kind: MessageKind) -> Result<()> {
        let modal = Modal::Message(MessageDialog {
            title: title.to_string(),
            text: text.to_string(),
            kind,
        });
        self.run_modal(modal)?;
        Ok(())
    }

    fn text(&mut self, title: &str, heading: &str, body: &str) -> Result<()> {
        self.run_modal(Modal::Text(TextViewer::new(title, heading, body)))?;
        Ok(())
    }
}
