//! Defines the endpoint for listing all expenses.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState,
    expense::{ExpenseJson, StatusMessage, list_expenses},
};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ListExpensesState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for listing all expenses, newest first.
///
/// An empty store responds with `{"message": "expenses not found"}` instead
/// of an empty array, which is the shape the original front end branches on.
/// Query failures are logged and get the same fallback body.
pub async fn list_expenses_endpoint(State(state): State<ListExpensesState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Json(StatusMessage::new("expenses not found")).into_response();
        }
    };

    match list_expenses(&connection) {
        Ok(expenses) if !expenses.is_empty() => {
            let expenses: Vec<ExpenseJson> = expenses.into_iter().map(ExpenseJson::from).collect();
            Json(expenses).into_response()
        }
        Ok(_) => Json(StatusMessage::new("expenses not found")).into_response(),
        Err(error) => {
            tracing::error!("Could not list expenses: {error}");
            Json(StatusMessage::new("expenses not found")).into_response()
        }
    }
}
