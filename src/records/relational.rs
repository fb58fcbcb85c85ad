use anyhow::Result;
use rusqlite::Connection;

use super::{view_records, write_record, EntryForm, Listing, WriteOutcome};
use crate::db::{fetch_customers, fetch_orders, insert_customer, insert_order};
use crate::format::{cell, decimal};
use crate::input::{FieldKind, FieldSpec};
use crate::models::{Customer, Order};
use crate::ui::Dialogs;

pub const CUSTOMER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("customer_id", FieldKind::Integer),
    FieldSpec::required("first_name", FieldKind::Text),
    FieldSpec::optional("last_name", FieldKind::Text),
];

pub const ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("order_id", FieldKind::Integer),
    FieldSpec::required("customer_id", FieldKind::Integer),
    FieldSpec::required("order_date", FieldKind::Text),
    FieldSpec::required("total_amount", FieldKind::Decimal),
];

const ADD_CUSTOMER: EntryForm = EntryForm {
    title: "Add Customer",
    prompt: "Enter new customer information",
    fields: CUSTOMER_FIELDS,
    noun: "customer",
};

const ADD_ORDER: EntryForm = EntryForm {
    title: "Add Order",
    prompt: "Enter new order details",
    fields: ORDER_FIELDS,
    noun: "order",
};

const CUSTOMER_LISTING: Listing = Listing {
    title: "Customers",
    heading: "Customers List",
    headers: &["Customer ID", "First Name", "Last Name"],
    empty_message: "No customers found.",
    noun: "customers",
};

const ORDER_LISTING: Listing = Listing {
    title: "Orders",
    heading: "Orders List",
    headers: &["Order ID", "Customer ID", "Date", "Amount"],
    empty_message: "No orders found.",
    noun: "orders",
};

pub fn add_customer(conn: &Connection, dialogs: &mut dyn Dialogs) -> Result<WriteOutcome> {
    write_record(
        conn,
        dialogs,
        &ADD_CUSTOMER,
        |values| {
            Ok(Customer {
                customer_id: values.integer(0)?,
                first_name: values.text(1)?,
                last_name: values.optional_text(2),
            })
        },
        |conn, customer| {
            insert_customer(conn, &customer)?;
            Ok(format!(
                "Customer '{}' added successfully!",
                customer.first_name
            ))
        },
    )
}

/// Add an order. The customer id is stored as typed, whether or not that
/// customer exists.
pub fn add_order(conn: &Connection, dialogs: &mut dyn Dialogs) -> Result<WriteOutcome> {
    write_record(
        conn,
        dialogs,
        &ADD_ORDER,
        |values| {
            Ok(Order {
                order_id: values.integer(0)?,
                customer_id: values.integer(1)?,
                order_date: values.text(2)?,
                total_amount: values.decimal(3)?,
            })
        },
        |conn, order| {
            insert_order(conn, &order)?;
            Ok(format!("Order {} was added successfully!", order.order_id))
        },
    )
}

pub fn show_customers(conn: &Connection, dialogs: &mut dyn Dialogs) -> Result<()> {
    view_records(dialogs, &CUSTOMER_LISTING, fetch_customers(conn), |customer| {
        vec![
            customer.customer_id.to_string(),
            customer.first_name.clone(),
            cell(customer.last_name.as_deref()),
        ]
    })
}

pub fn show_orders(conn: &Connection, dialogs: &mut dyn Dialogs) -> Result<()> {
    view_records(dialogs, &ORDER_LISTING, fetch_orders(conn), |order| {
        vec![
            order.order_id.to_string(),
            order.customer_id.to_string(),
            order.order_date.clone(),
            decimal(order.total_amount),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{apply_schema, Schema};
    use crate::testing::ScriptedDialogs;
    use crate::ui::MessageKind;

    fn store() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn, Schema::Relational).unwrap();
        conn
    }

    fn data_lines(text: &str) -> Vec<Vec<&str>> {
        text.lines()
            .skip(2)
            .map(|line| line.split('\t').collect())
            .collect()
    }

    #[test]
    fn customer_and_order_scenario() {
        let conn = store();
        let mut dialogs = ScriptedDialogs::new();

        dialogs.submit(&["1", "Ana", "Lee"]);
        assert_eq!(add_customer(&conn, &mut dialogs).unwrap(), WriteOutcome::Saved);
        show_customers(&conn, &mut dialogs).unwrap();
        assert_eq!(
            data_lines(dialogs.last_text().unwrap()),
            vec![vec!["1", "Ana", "Lee"]]
        );

        dialogs.submit(&["10", "1", "2024-01-01", "99.5"]);
        assert_eq!(add_order(&conn, &mut dialogs).unwrap(), WriteOutcome::Saved);
        show_orders(&conn, &mut dialogs).unwrap();
        assert_eq!(
            data_lines(dialogs.last_text().unwrap()),
            vec![vec!["10", "1", "2024-01-01", "99.5"]]
        );

        dialogs.submit(&["1", "Bea", "Kim"]);
        assert_eq!(
            add_customer(&conn, &mut dialogs).unwrap(),
            WriteOutcome::Conflict
        );
        assert_eq!(
            dialogs.last_message(),
            Some(("Error: Customer ID '1' already exists.", MessageKind::Error))
        );
        show_customers(&conn, &mut dialogs).unwrap();
        assert_eq!(
            data_lines(dialogs.last_text().unwrap()),
            vec![vec!["1", "Ana", "Lee"]]
        );
    }

    #[test]
    fn last_name_is_optional() {
        let conn = store();
        let mut dialogs = ScriptedDialogs::new();
        dialogs.submit(&["2", "Cher", ""]);

        assert_eq!(add_customer(&conn, &mut dialogs).unwrap(), WriteOutcome::Saved);
        show_customers(&conn, &mut dialogs).unwrap();
        assert!(dialogs.last_text().unwrap().contains("2\tCher\t\n"));
    }

    #[test]
    fn blank_required_customer_field_is_rejected() {
        let complete = ["1", "Ana", "Lee"];
        for (blank, label) in [(0, "customer_id"), (1, "first_name")] {
            let conn = store();
            let mut dialogs = ScriptedDialogs::new();
            let mut values = complete;
            values[blank] = "";
            dialogs.submit(&values);

            assert_eq!(
                add_customer(&conn, &mut dialogs).unwrap(),
                WriteOutcome::Rejected,
                "blank {label}"
            );
            assert!(fetch_customers(&conn).unwrap().is_empty());
            let expected = format!("{label} is required.");
            assert_eq!(
                dialogs.last_message(),
                Some((expected.as_str(), MessageKind::Error))
            );
        }
    }

    #[test]
    fn any_blank_order_field_is_rejected() {
        let complete = ["10", "1", "2024-01-01", "99.5"];
        for blank in 0..complete.len() {
            let conn = store();
            let mut dialogs = ScriptedDialogs::new();
            let mut values = complete;
            values[blank] = "";
            dialogs.submit(&values);

            assert_eq!(
                add_order(&conn, &mut dialogs).unwrap(),
                WriteOutcome::Rejected,
                "blank field {blank}"
            );
            assert!(fetch_orders(&conn).unwrap().is_empty());
        }
    }

    #[test]
    fn duplicate_order_names_the_id() {
        let conn = store();
        let mut dialogs = ScriptedDialogs::new();
        dialogs
            .submit(&["10", "1", "2024-01-01", "99.5"])
            .submit(&["10", "2", "2024-02-01", "5"]);

        add_order(&conn, &mut dialogs).unwrap();
        assert_eq!(add_order(&conn, &mut dialogs).unwrap(), WriteOutcome::Conflict);
        assert_eq!(
            dialogs.last_message(),
            Some(("Error: Order ID '10' already exists.", MessageKind::Error))
        );
        assert_eq!(fetch_orders(&conn).unwrap()[0].total_amount, 99.5);
    }

    #[test]
    fn whole_amount_keeps_its_decimal_point() {
        let conn = store();
        let mut dialogs = ScriptedDialogs::new();
        dialogs.submit(&["12", "1", "2024-04-01", "100.0"]);

        add_order(&conn, &mut dialogs).unwrap();
        show_orders(&conn, &mut dialogs).unwrap();

        assert_eq!(
            data_lines(dialogs.last_text().unwrap()),
            vec![vec!["12", "1", "2024-04-01", "100.0"]]
        );
    }

    #[test]
    fn order_for_unknown_customer_is_stored() {
        let conn = store();
        let mut dialogs = ScriptedDialogs::new();
        dialogs.submit(&["11", "404", "2024-03-01", "12.25"]);

        assert_eq!(add_order(&conn, &mut dialogs).unwrap(), WriteOutcome::Saved);
        assert_eq!(
            dialogs.last_message(),
            Some(("Order 11 was added successfully!", MessageKind::Info))
        );
    }

    #[test]
    fn empty_tables_show_none_found() {
        let conn = store();
        let mut dialogs = ScriptedDialogs::new();

        show_customers(&conn, &mut dialogs).unwrap();
        show_orders(&conn, &mut dialogs).unwrap();

        assert_eq!(
            dialogs.messages(),
            vec![
                ("No customers found.", MessageKind::Info),
                ("No orders found.", MessageKind::Info)
            ]
        );
    }
}
