//! Defines the endpoint for deleting an expense.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState,
    expense::{ExpenseId, StatusMessage, delete_expense},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for deleting an expense.
#[derive(Debug, Deserialize)]
pub struct DeleteExpenseForm {
    /// The id of the expense to delete.
    pub expense_id: ExpenseId,
}

/// A route handler for deleting an expense.
///
/// Deleting an id that matches no row reports success, which makes the
/// operation idempotent from the client's point of view. The zero-row case
/// is logged.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Json(form): Json<DeleteExpenseForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Json(StatusMessage::new("Expense Not Deleted")).into_response();
        }
    };

    match delete_expense(form.expense_id, &connection) {
        Ok(rows_affected) => {
            if rows_affected == 0 {
                tracing::info!("delete of expense {} matched no rows", form.expense_id);
            }
            Json(StatusMessage::new("Expense Deleted")).into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete expense {}: {error}", form.expense_id);
            Json(StatusMessage::new("Expense Not Deleted")).into_response()
        }
    }
}
