//! Dialog states rendered by the terminal front-end. Each dialog owns its
//! state, knows how to draw itself over whatever is on screen and how to react
//! to a key press. A key either keeps the dialog open or resolves it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::dialogs::MessageKind;
use super::forms::FormState;
use super::helpers::{centered_rect, expand_tabs};

/// How a dialog was closed.
#[derive(Debug, PartialEq)]
pub(crate) enum Resolution {
    Chosen(usize),
    Submitted(Vec<String>),
    /// Acknowledged a message or closed the viewer.
    Closed,
    /// Esc, Ctrl+C, or the window equivalent of clicking the close box.
    Dismissed,
}

pub(crate) struct ButtonDialog {
    pub(crate) title: String,
    pub(crate) prompt: String,
    pub(crate) choices: Vec<String>,
    pub(crate) selected: usize,
}

pub(crate) struct FormDialog {
    pub(crate) title: String,
    pub(crate) prompt: String,
    pub(crate) form: FormState,
}

pub(crate) struct MessageDialog {
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) kind: MessageKind,
}

pub(crate) struct TextViewer {
    pub(crate) title: String,
    pub(crate) heading: String,
    pub(crate) lines: Vec<String>,
    pub(crate) scroll: usize,
    /// First visible column, for rows wider than the popup.
    pub(crate) hscroll: usize,
    /// Rows visible at the last draw, used for paging.
    pub(crate) page: usize,
    /// Columns visible at the last draw.
    pub(crate) width: usize,
}

/// The dialog currently on screen.
pub(crate) enum Modal {
    Buttons(ButtonDialog),
    Form(FormDialog),
    Message(MessageDialog),
    Text(TextViewer),
}

/// Columns moved per Left/Right press in the text viewer.
const TAB_STEP: usize = 8;

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

impl Modal {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Resolution> {
        if is_interrupt(&key) {
            return Some(Resolution::Dismissed);
        }
        match self {
            Modal::Buttons(dialog) => dialog.handle_key(key.code),
            Modal::Form(dialog) => dialog.handle_key(key.code),
            Modal::Message(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Resolution::Closed),
                _ => None,
            },
            Modal::Text(viewer) => viewer.handle_key(key.code),
        }
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self {
            Modal::Buttons(dialog) => dialog.draw(frame, area),
            Modal::Form(dialog) => dialog.draw(frame, area),
            Modal::Message(dialog) => dialog.draw(frame, area),
            Modal::Text(viewer) => viewer.draw(frame, area),
        }
    }
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

impl ButtonDialog {
    fn handle_key(&mut self, code: KeyCode) -> Option<Resolution> {
        let count = self.choices.len();
        match code {
            KeyCode::Esc => Some(Resolution::Dismissed),
            KeyCode::Enter if count > 0 => Some(Resolution::Chosen(self.selected)),
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab if count > 0 => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab if count > 0 => {
                self.selected = (self.selected + 1) % count;
                None
            }
            _ => None,
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut option_spans = Vec::new();
        for (idx, label) in self.choices.iter().enumerate() {
            if idx > 0 {
                option_spans.push(Span::raw("   "));
            }
            let style = if self.selected == idx {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            option_spans.push(Span::styled(format!("[ {label} ]"), style));
        }

        let lines = vec![
            Line::from(self.prompt.clone()),
            Line::from(""),
            Line::from(option_spans),
            Line::from(""),
            hint("Use ←/→ to choose • Enter to confirm • Esc to close"),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

impl FormDialog {
    fn handle_key(&mut self, code: KeyCode) -> Option<Resolution> {
        match code {
            KeyCode::Esc => return Some(Resolution::Dismissed),
            KeyCode::Enter => {
                return Some(Resolution::Submitted(self.form.clone().into_values()));
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.previous_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
        None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![Line::from(self.prompt.clone()), Line::from("")];
        let first_field_row = lines.len() as u16;
        for idx in 0..self.form.fields.len() {
            lines.push(self.form.build_line(idx));
        }
        lines.push(Line::from(""));
        lines.push(hint("Enter to save • Tab to switch • Esc to cancel"));

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        if !self.form.fields.is_empty() {
            let cursor_x = inner.x + self.form.cursor_offset() as u16;
            let cursor_y = inner.y + first_field_row + self.form.active as u16;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl MessageDialog {
    fn draw(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let border_style = match self.kind {
            MessageKind::Info => Style::default(),
            MessageKind::Error => Style::default().fg(Color::Red),
        };
        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = self.text.lines().map(Line::from).collect();
        lines.push(Line::from(""));
        lines.push(hint("Press Enter to continue."));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

impl TextViewer {
    pub(crate) fn new(title: &str, heading: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            heading: heading.to_string(),
            lines: body.lines().map(expand_tabs).collect(),
            scroll: 0,
            hscroll: 0,
            page: 1,
            width: 1,
        }
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.page)
    }

    fn max_hscroll(&self) -> usize {
        let widest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        widest.saturating_sub(self.width)
    }

    fn handle_key(&mut self, code: KeyCode) -> Option<Resolution> {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                return Some(Resolution::Closed);
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(self.page),
            KeyCode::PageDown => self.scroll = (self.scroll + self.page).min(self.max_scroll()),
            KeyCode::Left => self.hscroll = self.hscroll.saturating_sub(TAB_STEP),
            KeyCode::Right => self.hscroll = (self.hscroll + TAB_STEP).min(self.max_hscroll()),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
        None
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(90, 80, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        // heading, blank line, body..., blank line, hint
        self.page = (inner.height as usize).saturating_sub(4).max(1);
        self.width = (inner.width as usize).max(1);
        self.scroll = self.scroll.min(self.max_scroll());
        self.hscroll = self.hscroll.min(self.max_hscroll());

        let mut lines = vec![
            Line::from(Span::styled(
                self.heading.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(
            self.lines
                .iter()
                .skip(self.scroll)
                .take(self.page)
                .map(|line| {
                    let visible: String = line.chars().skip(self.hscroll).collect();
                    Line::from(visible)
                }),
        );
        while lines.len() < self.page + 2 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(hint("↑/↓/←/→ PgUp/PgDn to scroll • Enter or Esc to close"));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
