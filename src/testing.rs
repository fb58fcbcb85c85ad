//! Test double for the dialog layer: answers come from queues filled by the
//! test, everything shown to the "user" is recorded for assertions.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};

use crate::input::FieldSpec;
use crate::ui::{Dialogs, MessageKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Message {
        title: String,
        text: String,
        kind: MessageKind,
    },
    Text {
        title: String,
        body: String,
    },
}

#[derive(Default)]
pub struct ScriptedDialogs {
    pub choices: VecDeque<Option<usize>>,
    pub forms: VecDeque<Option<Vec<String>>>,
    pub shown: Vec<Shown>,
    /// Titles of every form that was opened, in order.
    pub form_titles: Vec<String>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, values: &[&str]) -> &mut Self {
        self.forms
            .push_back(Some(values.iter().map(|v| v.to_string()).collect()));
        self
    }

    pub fn cancel_form(&mut self) -> &mut Self {
        self.forms.push_back(None);
        self
    }

    pub fn pick(&mut self, choice: Option<usize>) -> &mut Self {
        self.choices.push_back(choice);
        self
    }

    pub fn messages(&self) -> Vec<(&str, MessageKind)> {
        self.shown
            .iter()
            .filter_map(|shown| match shown {
                Shown::Message { text, kind, .. } => Some((text.as_str(), *kind)),
                Shown::Text { .. } => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<(&str, MessageKind)> {
        self.messages().last().copied()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.shown.iter().rev().find_map(|shown| match shown {
            Shown::Text { body, .. } => Some(body.as_str()),
            Shown::Message { .. } => None,
        })
    }
}

impl Dialogs for ScriptedDialogs {
    fn choose(&mut self, _title: &str, _prompt: &str, choices: &[&str]) -> Result<Option<usize>> {
        let choice = self
            .choices
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted menu choice left"))?;
        if let Some(idx) = choice {
            assert!(idx < choices.len(), "scripted choice {idx} out of range");
        }
        Ok(choice)
    }

    fn form(
        &mut self,
        title: &str,
        _prompt: &str,
        fields: &[FieldSpec],
    ) -> Result<Option<Vec<String>>> {
        self.form_titles.push(title.to_string());
        let values = self
            .forms
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted form answer left"))?;
        if let Some(values) = &values {
            assert_eq!(values.len(), fields.len(), "scripted answer for {title}");
        }
        Ok(values)
    }

    fn message(&mut self, title: &str, text: &str, kind: MessageKind) -> Result<()> {
        self.shown.push(Shown::Message {
            title: title.to_string(),
            text: text.to_string(),
            kind,
        });
        Ok(())
    }

    fn text(&mut self, title: &str, _heading: &str, body: &str) -> Result<()> {
        self.shown.push(Shown::Text {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
