//! Database operations for expenses.
//!
//! This is the only module that knows the expense storage schema. All
//! statements use bound parameters, string inputs are stripped of markup
//! tags and amounts are validated before any SQL runs.

use rusqlite::{Connection, OptionalExtension, Row, params};
use time::OffsetDateTime;

use crate::{
    Error,
    employee::EmployeeId,
    expense::{Expense, ExpenseId, validate_amount},
    sanitize::strip_tags,
};

/// The number of rows changed by a mutating statement.
///
/// Updates and deletes of an id that matches no row report zero instead of
/// failing, so callers can decide whether a no-op matters to them.
pub type RowsAffected = usize;

/// Initialize the expense table and indexes.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            employee_id INTEGER NOT NULL REFERENCES employee(id),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expense_created_at ON expense(created_at);",
    )?;

    Ok(())
}

/// Create an expense and return its generated ID.
///
/// The creation timestamp is assigned here; callers cannot choose it.
///
/// # Errors
/// This function will return an error if:
/// - `amount` is not a positive dollar value with at most two decimal places,
/// - `employee_id` does not refer to a valid employee,
/// - or there is some other SQL error.
pub fn create_expense(
    description: &str,
    amount: f64,
    employee_id: EmployeeId,
    connection: &Connection,
) -> Result<ExpenseId, Error> {
    insert_expense(
        description,
        amount,
        employee_id,
        OffsetDateTime::now_utc(),
        connection,
    )
}

fn insert_expense(
    description: &str,
    amount: f64,
    employee_id: EmployeeId,
    created_at: OffsetDateTime,
    connection: &Connection,
) -> Result<ExpenseId, Error> {
    let amount = validate_amount(amount)?;
    let description = strip_tags(description);

    connection.execute(
        "INSERT INTO expense (description, amount, employee_id, created_at) \
        VALUES (?1, ?2, ?3, ?4)",
        params![description, amount, employee_id, created_at],
    )?;

    Ok(connection.last_insert_rowid())
}

/// Retrieve a single expense by ID, joined with the employee name.
///
/// A missing row is `Ok(None)`, not an error.
pub fn get_expense(
    expense_id: ExpenseId,
    connection: &Connection,
) -> Result<Option<Expense>, Error> {
    connection
        .prepare(
            "SELECT e.id, e.description, e.amount, e.employee_id, w.name, e.created_at
            FROM expense e
            LEFT JOIN employee w ON e.employee_id = w.id
            WHERE e.id = :id",
        )?
        .query_row(&[(":id", &expense_id)], map_row)
        .optional()
        .map_err(Error::from)
}

/// Retrieve all expenses joined with employee names, newest first.
///
/// Each call re-queries the store, so the result is a fresh snapshot.
pub fn list_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT e.id, e.description, e.amount, e.employee_id, w.name, e.created_at
            FROM expense e
            LEFT JOIN employee w ON e.employee_id = w.id
            ORDER BY e.created_at DESC, e.id DESC",
        )?
        .query_map([], map_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the three mutable fields of the expense matching `expense_id`.
///
/// The id and creation timestamp are never touched. Returns the number of
/// rows changed; zero means no expense had that id.
///
/// # Errors
/// This function will return an error if:
/// - `amount` is not a positive dollar value with at most two decimal places,
/// - `employee_id` does not refer to a valid employee,
/// - or there is some other SQL error.
pub fn update_expense(
    expense_id: ExpenseId,
    description: &str,
    amount: f64,
    employee_id: EmployeeId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    let amount = validate_amount(amount)?;
    let description = strip_tags(description);

    connection
        .execute(
            "UPDATE expense SET description = ?1, amount = ?2, employee_id = ?3 WHERE id = ?4",
            params![description, amount, employee_id, expense_id],
        )
        .map_err(Error::from)
}

/// Delete the expense matching `expense_id`.
///
/// Returns the number of rows removed; zero means no expense had that id.
pub fn delete_expense(
    expense_id: ExpenseId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expense WHERE id = ?1", [expense_id])
        .map_err(Error::from)
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        employee_id: row.get(3)?,
        employee_name: row.get(4)?,
        created_at: row.get(5)?,
    })
}
