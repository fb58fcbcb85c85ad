use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::input::{accepts_char, FieldSpec};

/// Editing state of a modal entry form: one buffer per field plus focus.
#[derive(Clone)]
pub(crate) struct FormState {
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) values: Vec<String>,
    pub(crate) active: usize,
}

impl FormState {
    pub(crate) fn new(fields: &[FieldSpec]) -> Self {
        Self {
            fields: fields.to_vec(),
            values: vec![String::new(); fields.len()],
            active: 0,
        }
    }

    /// Move focus to the next field, wrapping at the end.
    pub(crate) fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    /// Move focus to the previous field, wrapping at the start.
    pub(crate) fn previous_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Append a character to the active field if its kind allows it.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let Some(spec) = self.fields.get(self.active) else {
            return false;
        };
        let value = &mut self.values[self.active];
        if accepts_char(spec.kind, value, ch) {
            value.push(ch);
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.active) {
            value.pop();
        }
    }

    pub(crate) fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Width of the widest label, used to align the input column.
    pub(crate) fn label_width(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Render one field as `label: value`, highlighting the focused one.
    pub(crate) fn build_line(&self, idx: usize) -> Line<'static> {
        let spec = &self.fields[idx];
        let value = &self.values[idx];
        let is_active = idx == self.active;

        let placeholder = if spec.required {
            "<required>"
        } else {
            "<optional>"
        };
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{:>width$}: ", spec.label, width = self.label_width())),
            Span::styled(display, style),
        ])
    }

    /// Column of the cursor inside the focused line.
    pub(crate) fn cursor_offset(&self) -> usize {
        self.label_width() + 2 + self.values[self.active].chars().count()
    }
}
