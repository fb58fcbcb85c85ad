//! Domain models that mirror the SQLite schema of both programs. They stay
//! light-weight data holders: parsing lives in `records`, persistence in `db`
//! and presentation in `format`.

#[derive(Debug, Clone, PartialEq)]
/// A stored football player. The id is assigned by SQLite on insert, every
/// other column is whatever the user typed into the "Add Player" form.
pub struct Player {
    /// Auto-increment primary key.
    pub id: i64,
    pub name: String,
    pub position: String,
    /// Shirt number. Optional in the schema, so `None` maps to NULL.
    pub player_number: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
}

/// Player fields collected from the form, before SQLite hands out an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub player_number: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
}

impl NewPlayer {
    /// Attach the id SQLite generated for this row.
    pub fn with_id(self, id: i64) -> Player {
        Player {
            id,
            name: self.name,
            position: self.position,
            player_number: self.player_number,
            goals: self.goals,
            assists: self.assists,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A customer in the relational variant. Unlike players, the id is chosen
/// by the user and must be unique.
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// An order placed by a customer. `customer_id` is a loose reference: the
/// schema declares the foreign key but nothing checks it before insert.
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    /// Free-form date text, stored exactly as entered.
    pub order_date: String,
    pub total_amount: f64,
}
