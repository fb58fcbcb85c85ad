use log::info;
use rusqlite::{params, Connection};

use super::map_insert_error;
use crate::error::StoreError;
use crate::models::Order;

/// Every order, in storage order.
pub fn fetch_orders(conn: &Connection) -> Result<Vec<Order>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT order_id, customer_id, order_date, total_amount FROM Orders")?;

    let orders = stmt
        .query_map([], |row| {
            Ok(Order {
                order_id: row.get(0)?,
                customer_id: row.get(1)?,
                order_date: row.get(2)?,
                total_amount: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(orders)
}

/// Insert an order. The referenced customer is not looked up first.
pub fn insert_order(conn: &Connection, order: &Order) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO Orders (order_id, customer_id, order_date, total_amount)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            order.order_id,
            order.customer_id,
            order.order_date,
            order.total_amount
        ],
    )
    .map_err(|err| map_insert_error(err, "Order ID", order.order_id))?;
    tx.commit()?;

    info!(
        "inserted order {} for customer {}",
        order.order_id, order.customer_id
    );
    Ok(())
}
