use anyhow::Result;
use rusqlite::Connection;

use super::{view_records, write_record, EntryForm, Listing, WriteOutcome};
use crate::db::{fetch_players, insert_player};
use crate::format::cell;
use crate::input::{FieldKind, FieldSpec};
use crate::models::NewPlayer;
use crate::ui::Dialogs;

pub const PLAYER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Player_name", FieldKind::Text),
    FieldSpec::required("Position", FieldKind::Text),
    FieldSpec::optional("Player_number", FieldKind::Integer),
    FieldSpec::optional("Goals", FieldKind::Integer),
    FieldSpec::optional("Assists", FieldKind::Integer),
];

const ADD_PLAYER: EntryForm = EntryForm {
    title: "Add Player",
    prompt: "Enter information about your new player",
    fields: PLAYER_FIELDS,
    noun: "player",
};

const PLAYER_LISTING: Listing = Listing {
    title: "Player List",
    heading: "All Players",
    headers: &["Name", "Position", "Number", "Goals", "Assists"],
    empty_message: "No players found in the database.",
    noun: "players",
};

pub fn add_player(conn: &Connection, dialogs: &mut dyn Dialogs) -> Result<WriteOutcome> {
    write_record(
        conn,
        dialogs,
        &ADD_PLAYER,
        |values| {
            Ok(NewPlayer {
                name: values.text(0)?,
                position: values.text(1)?,
                player_number: values.optional_integer(2)?,
                goals: values.optional_integer(3)?,
                assists: values.optional_integer(4)?,
            })
        },
        |conn, player| {
            let player = insert_player(conn, player)?;
            Ok(format!("Player '{}' added successfully!", player.name))
        },
    )
}

pub fn show_players(conn: &Connection, dialogs: &mut dyn Dialogs) -> Result<()> {
    view_records(dialogs, &PLAYER_LISTING, fetch_players(conn), |player| {
        vec![
            player.name.clone(),
            player.position.clone(),
            cell(player.player_number),
            cell(player.goals),
            cell(player.assists),
        ]
    })
}
