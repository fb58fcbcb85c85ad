//! Fixed per-program settings. Neither program reads flags or environment
//! variables: the file names below are the whole configuration surface.

use crate::db::Schema;
use crate::menu::{MenuAction, MenuEntry, MenuSpec};
use crate::records::{
    add_customer, add_order, add_player, show_customers, show_orders, show_players,
};

/// Everything one program needs to start.
pub struct AppConfig {
    /// SQLite file, relative to the working directory.
    pub db_file: &'static str,
    pub log_file: &'static str,
    pub schema: Schema,
    pub menu: MenuSpec,
}

const FOOTBALL_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        label: "Add Player",
        action: MenuAction::Write(add_player),
    },
    MenuEntry {
        label: "Show All Players",
        action: MenuAction::View(show_players),
    },
];

const RELATIONAL_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        label: "Add Customer",
        action: MenuAction::Write(add_customer),
    },
    MenuEntry {
        label: "Add Order",
        action: MenuAction::Write(add_order),
    },
    MenuEntry {
        label: "Show Customers",
        action: MenuAction::View(show_customers),
    },
    MenuEntry {
        label: "Show Orders",
        action: MenuAction::View(show_orders),
    },
];

/// Player roster kept in `Football_Database.db`.
pub const FOOTBALL: AppConfig = AppConfig {
    db_file: "Football_Database.db",
    log_file: "Football_Database.log",
    schema: Schema::Football,
    menu: MenuSpec {
        title: "Main Menu",
        prompt: "What would you like to do?",
        entries: FOOTBALL_ENTRIES,
    },
};

/// Customers and their orders kept in `relational_database.db`.
pub const RELATIONAL: AppConfig = AppConfig {
    db_file: "relational_database.db",
    log_file: "relational_database.log",
    schema: Schema::Relational,
    menu: MenuSpec {
        title: "Main Menu",
        prompt: "What would you like to do?",
        entries: RELATIONAL_ENTRIES,
    },
};
