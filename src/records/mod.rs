//! The record actions wired into the menus: one writer per entity collecting
//! a form and inserting a row, one viewer per table rendering a listing.
//! Every recoverable failure ends in a dialog; only dialog I/O errors escape.

mod players;
mod relational;

use anyhow::Result;
use log::{error, info, warn};
use rusqlite::Connection;

use crate::error::{FormError, StoreError};
use crate::format::render_table;
use crate::input::{FieldSpec, FormValues};
use crate::ui::{Dialogs, MessageKind};

pub use players::{add_player, show_players, PLAYER_FIELDS};
pub use relational::{
    add_customer, add_order, show_customers, show_orders, CUSTOMER_FIELDS, ORDER_FIELDS,
};

/// How a writer invocation ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The form was dismissed, nothing happened.
    Cancelled,
    /// A field was blank or malformed.
    Rejected,
    /// The key already exists.
    Conflict,
    /// Any other storage failure.
    Failed,
    Saved,
}

/// Static description of a create form.
pub(crate) struct EntryForm {
    pub(crate) title: &'static str,
    pub(crate) prompt: &'static str,
    pub(crate) fields: &'static [FieldSpec],
    /// Used in "Failed to add ..." messages.
    pub(crate) noun: &'static str,
}

/// Static description of a listing.
pub(crate) struct Listing {
    pub(crate) title: &'static str,
    pub(crate) heading: &'static str,
    pub(crate) headers: &'static [&'static str],
    pub(crate) empty_message: &'static str,
    pub(crate) noun: &'static str,
}

/// Run the shared writer flow: form, presence check, parse, insert, report.
/// `insert` returns the confirmation text shown on success.
pub(crate) fn write_record<T>(
    conn: &Connection,
    dialogs: &mut dyn Dialogs,
    entry: &EntryForm,
    parse: impl FnOnce(&FormValues<'_>) -> Result<T, FormError>,
    insert: impl FnOnce(&Connection, T) -> Result<String, StoreError>,
) -> Result<WriteOutcome> {
    let Some(raw) = dialogs.form(entry.title, entry.prompt, entry.fields)? else {
        info!("{} cancelled", entry.title);
        return Ok(WriteOutcome::Cancelled);
    };

    let parsed = FormValues::new(entry.fields, &raw).and_then(|values| {
        values.check_required()?;
        parse(&values)
    });
    let record = match parsed {
        Ok(record) => record,
        Err(err) => {
            warn!("{} rejected: {err}", entry.title);
            dialogs.message("Input Error", &err.to_string(), MessageKind::Error)?;
            return Ok(WriteOutcome::Rejected);
        }
    };

    match insert(conn, record) {
        Ok(confirmation) => {
            dialogs.message("Success", &confirmation, MessageKind::Info)?;
            Ok(WriteOutcome::Saved)
        }
        Err(err @ StoreError::Conflict { .. }) => {
            warn!("{} refused: {err}", entry.title);
            dialogs.message("Database Error", &format!("Error: {err}"), MessageKind::Error)?;
            Ok(WriteOutcome::Conflict)
        }
        Err(err) => {
            error!("{} failed: {err}", entry.title);
            dialogs.message(
                "Database Error",
                &format!("Failed to add {}: {err}", entry.noun),
                MessageKind::Error,
            )?;
            Ok(WriteOutcome::Failed)
        }
    }
}

/// Run the shared viewer flow over an already-fetched result.
pub(crate) fn view_records<T>(
    dialogs: &mut dyn Dialogs,
    listing: &Listing,
    fetched: Result<Vec<T>, StoreError>,
    row: impl Fn(&T) -> Vec<String>,
) -> Result<()> {
    let records = match fetched {
        Ok(records) => records,
        Err(err) => {
            error!("failed to load {}: {err}", listing.noun);
            return dialogs.message(
                "Database Error",
                &format!("Failed to retrieve {}: {err}", listing.noun),
                MessageKind::Error,
            );
        }
    };

    if records.is_empty() {
        return dialogs.message(listing.title, listing.empty_message, MessageKind::Info);
    }

    let text = render_table(listing.headers, records.iter().map(row));
    dialogs.text(listing.title, listing.heading, &text)
}
