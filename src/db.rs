//! Database initialization for the application's SQLite schema.

use rusqlite::Connection;

use crate::{Error, employee::create_employee_table, expense::create_expense_table};

/// Create the application tables if they do not already exist and turn on
/// foreign key enforcement for `connection`.
///
/// The `foreign_keys` pragma is per-connection, so this must be called on
/// every connection the application opens.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    create_employee_table(connection)?;
    create_expense_table(connection)?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), initialize(&connection));
    }

    #[test]
    fn is_idempotent() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        initialize(&connection).unwrap();

        assert_eq!(Ok(()), initialize(&connection));
    }

    #[test]
    fn enforces_foreign_keys() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        let result = connection.execute(
            "INSERT INTO expense (description, amount, employee_id, created_at) \
            VALUES ('Lunch', 9.99, 42, '2024-01-01T12:00:00Z')",
            (),
        );

        assert!(result.is_err());
    }
}
