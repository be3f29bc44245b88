//! The employee domain type and its database operations.
//!
//! Employees are reference data managed outside this application: the API
//! never mutates them, it only reads their names when serving expenses. Rows
//! are seeded by tests and by the `create_test_db` binary.

use rusqlite::Connection;

use crate::Error;

/// Database identifier for an employee.
pub type EmployeeId = i64;

/// An employee that expenses can be recorded against.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// The id for the employee.
    pub id: EmployeeId,
    /// The employee's display name.
    pub name: String,
}

/// Initialize the employee table.
pub fn create_employee_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS employee (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Create an employee and return it with its generated ID.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_employee(name: &str, connection: &Connection) -> Result<Employee, Error> {
    connection.execute("INSERT INTO employee (name) VALUES (?1)", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Employee {
        id,
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod employee_tests {
    use rusqlite::Connection;

    use super::{create_employee, create_employee_table};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_employee_table(&connection).expect("Could not create employee table");
        connection
    }

    #[test]
    fn create_table_sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_employee_table(&connection));
    }

    #[test]
    fn create_employee_assigns_increasing_ids() {
        let connection = get_test_connection();

        let first = create_employee("Jane Doe", &connection).unwrap();
        let second = create_employee("John Smith", &connection).unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Jane Doe");
        assert_eq!(second.name, "John Smith");
    }
}
