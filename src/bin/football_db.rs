//! Player roster: add players and list them from `Football_Database.db`.
use record_desk::{run, FOOTBALL};

fn main() -> anyhow::Result<()> {
    run(&FOOTBALL)
}
