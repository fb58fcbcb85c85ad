use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rusqlite::Connection;

/// Table layout for one of the two programs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Schema {
    /// Single `Football_Database` table of players.
    Football,
    /// `Customers` plus `Orders` with a declared foreign key.
    Relational,
}

const FOOTBALL_TABLES: &[(&str, &str)] = &[(
    "Football_Database",
    "CREATE TABLE IF NOT EXISTS Football_Database (
        id INTEGER PRIMARY KEY,
        Name TEXT NOT NULL,
        Position TEXT NOT NULL,
        Player_number INTEGER,
        Goals INTEGER,
        Assists INTEGER
    )",
)];

const RELATIONAL_TABLES: &[(&str, &str)] = &[
    (
        "Customers",
        "CREATE TABLE IF NOT EXISTS Customers (
            customer_id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT
        )",
    ),
    (
        "Orders",
        "CREATE TABLE IF NOT EXISTS Orders (
            order_id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL,
            order_date TEXT NOT NULL,
            total_amount REAL NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES Customers(customer_id)
        )",
    ),
];

impl Schema {
    fn tables(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Schema::Football => FOOTBALL_TABLES,
            Schema::Relational => RELATIONAL_TABLES,
        }
    }
}

/// Open (or create) the database file and make sure every table of `schema`
/// exists. The returned connection is the only one the process uses.
///
/// `PRAGMA foreign_keys` stays at SQLite's default, so the `Orders` foreign
/// key is declared but not enforced.
pub fn open_store(path: impl AsRef<Path>, schema: Schema) -> Result<Connection> {
    let path = path.as_ref();
    let mut conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database {}", path.display()))?;
    apply_schema(&mut conn, schema)?;
    info!("opened {} with {:?} schema", path.display(), schema);
    Ok(conn)
}

/// Create any missing tables in a single transaction and commit it.
pub fn apply_schema(conn: &mut Connection, schema: Schema) -> Result<()> {
    let tx = conn
        .transaction()
        .context("failed to begin schema transaction")?;

    for (table, ddl) in schema.tables() {
        tx.execute(ddl, [])
            .with_context(|| format!("failed to create {table} table"))?;
    }

    tx.commit().context("failed to commit schema")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn football_schema_creates_player_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Football).unwrap();
        assert_eq!(table_names(&conn), vec!["Football_Database"]);
    }

    #[test]
    fn relational_schema_creates_both_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Relational).unwrap();
        assert_eq!(table_names(&conn), vec!["Customers", "Orders"]);
    }

    #[test]
    fn applying_schema_twice_is_harmless() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Relational).unwrap();
        conn.execute(
            "INSERT INTO Customers (customer_id, first_name) VALUES (1, 'Ana')",
            [],
        )
        .unwrap();
        apply_schema(&mut conn, Schema::Relational).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Customers", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn foreign_key_is_declared_but_not_enforced() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Relational).unwrap();
        conn.execute(
            "INSERT INTO Orders VALUES (10, 999, '2024-01-01', 5.0)",
            [],
        )
        .unwrap();
    }
}
