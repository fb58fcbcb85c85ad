use log::info;
use rusqlite::{params, Connection};

use super::map_insert_error;
use crate::error::StoreError;
use crate::models::Customer;

/// Every customer, in storage order.
pub fn fetch_customers(conn: &Connection) -> Result<Vec<Customer>, StoreError> {
    let mut stmt = conn.prepare("SELECT customer_id, first_name, last_name FROM Customers")?;

    let customers = stmt
        .query_map([], |row| {
            Ok(Customer {
                customer_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(customers)
}

/// Insert a customer with a caller-chosen id. A duplicate id surfaces as
/// `StoreError::Conflict` and leaves the table untouched.
pub fn insert_customer(conn: &Connection, customer: &Customer) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO Customers (customer_id, first_name, last_name) VALUES (?1, ?2, ?3)",
        params![customer.customer_id, customer.first_name, customer.last_name],
    )
    .map_err(|err| map_insert_error(err, "Customer ID", customer.customer_id))?;
    tx.commit()?;

    info!("inserted customer {}", customer.customer_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{apply_schema, Schema};

    fn store() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Relational).unwrap();
        conn
    }

    fn customer(id: i64, first: &str, last: Option<&str>) -> Customer {
        Customer {
            customer_id: id,
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn duplicate_id_is_a_conflict_and_keeps_original() {
        let conn = store();
        insert_customer(&conn, &customer(1, "Ana", Some("Lee"))).unwrap();

        let err = insert_customer(&conn, &customer(1, "Bob", None)).unwrap_err();
        match err {
            StoreError::Conflict { entity, key } => {
                assert_eq!(entity, "Customer ID");
                assert_eq!(key, "1");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(
            fetch_customers(&conn).unwrap(),
            vec![customer(1, "Ana", Some("Lee"))]
        );
    }

    #[test]
    fn missing_last_name_is_stored_as_null() {
        let conn = store();
        insert_customer(&conn, &customer(2, "Cher", None)).unwrap();

        let last: Option<String> = conn
            .query_row(
                "SELECT last_name FROM Customers WHERE customer_id = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(last, None);
    }

    #[test]
    fn fetch_keeps_storage_order() {
        let conn = store();
        insert_customer(&conn, &customer(5, "Eve", None)).unwrap();
        insert_customer(&conn, &customer(3, "Dan", None)).unwrap();

        let ids: Vec<i64> = fetch_customers(&conn)
            .unwrap()
            .into_iter()
            .map(|c| c.customer_id)
            .collect();
        // INTEGER PRIMARY KEY is the rowid, so SQLite walks the table by id.
        assert_eq!(ids, vec![3, 5]);
    }
}
