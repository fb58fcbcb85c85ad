//! Customers and orders kept in `relational_database.db`.
use record_desk::{run, RELATIONAL};

fn main() -> anyhow::Result<()> {
    run(&RELATIONAL)
}
