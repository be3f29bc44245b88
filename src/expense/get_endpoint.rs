//! Defines the endpoint for reading a single expense.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState,
    expense::{ExpenseId, ExpenseJson, get_expense},
};

/// The state needed to read an expense.
#[derive(Debug, Clone)]
pub struct GetExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for GetExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for reading a single expense by the `expense_id` query
/// parameter.
///
/// A request without the parameter gets an empty response body. Any id that
/// matches no row (including one that is not an integer) gets the all-null
/// object, so the client always receives the same shape for this route.
pub async fn get_expense_endpoint(
    State(state): State<GetExpenseState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(raw_id) = params.get("expense_id") else {
        return StatusCode::OK.into_response();
    };

    let Ok(expense_id) = raw_id.parse::<ExpenseId>() else {
        return Json(ExpenseJson::empty()).into_response();
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Json(ExpenseJson::empty()).into_response();
        }
    };

    match get_expense(expense_id, &connection) {
        Ok(Some(expense)) => Json(ExpenseJson::from(expense)).into_response(),
        Ok(None) => Json(ExpenseJson::empty()).into_response(),
        Err(error) => {
            tracing::error!("Could not read expense {expense_id}: {error}");
            Json(ExpenseJson::empty()).into_response()
        }
    }
}
