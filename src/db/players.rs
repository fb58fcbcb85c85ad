use log::info;
use rusqlite::{params, Connection};

use super::map_insert_error;
use crate::error::StoreError;
use crate::models::{NewPlayer, Player};

/// Retrieve every player in storage order. There is no ORDER BY on purpose:
/// the listing reflects whatever order SQLite iterates the table in.
pub fn fetch_players(conn: &Connection) -> Result<Vec<Player>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, Name, Position, Player_number, Goals, Assists FROM Football_Database",
    )?;

    let players = stmt
        .query_map([], |row| {
            Ok(Player {
                id: row.get(0)?,
                name: row.get(1)?,
                position: row.get(2)?,
                player_number: row.get(3)?,
                goals: row.get(4)?,
                assists: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(players)
}

/// Insert a player inside its own transaction and return the stored row.
pub fn insert_player(conn: &Connection, player: NewPlayer) -> Result<Player, StoreError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO Football_Database (Name, Position, Player_number, Goals, Assists)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            player.name,
            player.position,
            player.player_number,
            player.goals,
            player.assists
        ],
    )
    .map_err(|err| map_insert_error(err, "Player", &player.name))?;

    let id = tx.last_insert_rowid();
    tx.commit()?;
    info!("inserted player {id} ({})", player.name);
    Ok(player.with_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{apply_schema, Schema};

    fn store() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Football).unwrap();
        conn
    }

    fn player(name: &str, number: Option<i64>) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            position: "Forward".to_string(),
            player_number: number,
            goals: Some(3),
            assists: None,
        }
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let conn = store();
        let first = insert_player(&conn, player("Vini", Some(7))).unwrap();
        let second = insert_player(&conn, player("Bellingham", Some(5))).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn fetch_returns_rows_with_nulls_preserved() {
        let conn = store();
        insert_player(&conn, player("Modric", None)).unwrap();

        let players = fetch_players(&conn).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Modric");
        assert_eq!(players[0].player_number, None);
        assert_eq!(players[0].goals, Some(3));
        assert_eq!(players[0].assists, None);
    }

    #[test]
    fn same_name_is_not_a_conflict() {
        let conn = store();
        insert_player(&conn, player("Rodrygo", Some(11))).unwrap();
        insert_player(&conn, player("Rodrygo", Some(11))).unwrap();
        assert_eq!(fetch_players(&conn).unwrap().len(), 2);
    }
}
