//! Core library for two small SQLite data-entry programs: a football player
//! roster and a customers/orders store. Both share one shape: a button menu
//! dispatching to record writers (modal form, validation, insert) and record
//! viewers (full table scan rendered as a tab-delimited listing).
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod menu;
pub mod models;
pub mod records;
pub mod ui;

#[cfg(test)]
mod testing;

/// Program entry point used by both binaries.
pub use app::run;

/// The two fixed program configurations.
pub use config::{AppConfig, FOOTBALL, RELATIONAL};

pub use db::{open_store, Schema};
pub use error::{FormError, StoreError};
pub use models::{Customer, NewPlayer, Order, Player};
pub use records::WriteOutcome;
