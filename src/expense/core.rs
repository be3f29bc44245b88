//! Core expense domain types and the wire shapes shared by the endpoints.

use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::{Error, employee::EmployeeId};

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// An expense line item recorded against an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The id for the expense.
    pub id: ExpenseId,
    /// What the expense was for.
    pub description: String,
    /// The amount in dollars.
    pub amount: f64,
    /// The employee the expense is recorded against.
    pub employee_id: EmployeeId,
    /// The employee's name, populated by queries that join the employee
    /// table. `None` if the employee row no longer exists.
    pub employee_name: Option<String>,
    /// When the expense was created. Assigned by the store and immutable.
    pub created_at: OffsetDateTime,
}

/// Check that `amount` is a usable dollar value.
///
/// Amounts must be finite, strictly positive and have at most two decimal
/// places (whole cents).
///
/// # Errors
/// Returns [Error::InvalidAmount] if `amount` violates any of the above.
pub fn validate_amount(amount: f64) -> Result<f64, Error> {
    let cents = amount * 100.0;

    if !amount.is_finite() || amount <= 0.0 || (cents - cents.round()).abs() > 1e-6 {
        return Err(Error::InvalidAmount(amount));
    }

    Ok(amount)
}

/// The JSON shape served by the list and read-one endpoints.
///
/// Every field is optional because the read-one endpoint responds with an
/// all-null object when no expense matches the requested id, the same shape
/// the original front end was written against. The creation timestamp is
/// stored but never serialized.
#[derive(Debug, Serialize)]
pub struct ExpenseJson {
    /// The expense id, or null for a missing expense.
    pub id: Option<ExpenseId>,
    /// What the expense was for.
    pub description: Option<String>,
    /// The amount in dollars, serialized as a string with exactly two
    /// decimal places (e.g. `"4.50"`) to match the decimal column the
    /// original schema used.
    #[serde(serialize_with = "serialize_amount")]
    pub amount: Option<f64>,
    /// The employee the expense is recorded against.
    pub employee_id: Option<EmployeeId>,
    /// The employee's name from the join, if the employee still exists.
    pub employee_name: Option<String>,
}

impl ExpenseJson {
    /// The all-null object served when no expense matches.
    pub fn empty() -> Self {
        Self {
            id: None,
            description: None,
            amount: None,
            employee_id: None,
            employee_name: None,
        }
    }
}

impl From<Expense> for ExpenseJson {
    fn from(expense: Expense) -> Self {
        Self {
            id: Some(expense.id),
            description: Some(expense.description),
            amount: Some(expense.amount),
            employee_id: Some(expense.employee_id),
            employee_name: expense.employee_name,
        }
    }
}

fn serialize_amount<S>(amount: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount {
        Some(amount) => serializer.serialize_str(&format!("{amount:.2}")),
        None => serializer.serialize_none(),
    }
}

/// The fixed status body used by the mutating endpoints and the empty-list
/// fallback, e.g. `{"message": "Expense Created"}`.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    /// The outcome description.
    pub message: &'static str,
}

impl StatusMessage {
    /// Wrap `message` in the status body.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
