//! Persistence module split per table, plus the connection/schema helpers.

mod connection;
mod customers;
mod orders;
mod players;

use std::fmt::Display;

use rusqlite::{ffi, Error as SqlError, ErrorCode};

use crate::error::StoreError;

pub use connection::{apply_schema, open_store, Schema};
pub use customers::{fetch_customers, insert_customer};
pub use orders::{fetch_orders, insert_order};
pub use players::{fetch_players, insert_player};

/// Turn primary-key and unique violations into `StoreError::Conflict` naming
/// the offending key. Other constraint failures (NOT NULL, foreign keys when
/// enabled) stay generic SQLite errors.
fn map_insert_error(err: SqlError, entity: &'static str, key: impl Display) -> StoreError {
    let is_key_conflict = matches!(
        err.sqlite_error(),
        Some(failure) if failure.code == ErrorCode::ConstraintViolation
            && matches!(
                failure.extended_code,
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
            )
    );

    if is_key_conflict {
        StoreError::Conflict {
            entity,
            key: key.to_string(),
        }
    } else {
        StoreError::Sqlite(err)
    }
}
