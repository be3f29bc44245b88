//! Defines the endpoint for updating an existing expense.

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
    employee::EmployeeId,
    expense::{ExpenseId, StatusMessage, update_expense},
};

/// The state needed to update an expense.
#[derive(Debug, Clone)]
pub struct UpdateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for updating an expense. The target id travels in the body,
/// not the path.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseForm {
    /// The id of the expense to update.
    pub expense_id: ExpenseId,
    /// What the expense was for.
    pub description: String,
    /// The amount in dollars.
    pub amount: f64,
    /// The employee the expense is recorded against.
    pub employee_id: EmployeeId,
}

/// A route handler for updating an expense.
///
/// An id that matches no row still reports success: the statement affected
/// zero rows without erroring, and clients of the original API rely on that
/// tolerance. The zero-row case is logged so operators can tell the
/// difference.
pub async fn update_expense_endpoint(
    State(state): State<UpdateExpenseState>,
    Json(form): Json<UpdateExpenseForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Json(StatusMessage::new("Expense Not Updated")).into_response();
        }
    };

    match update_expense(
        form.expense_id,
        &form.description,
        form.amount,
        form.employee_id,
        &connection,
    ) {
        Ok(rows_affected) => {
            if rows_affected == 0 {
                tracing::info!("update of expense {} matched no rows", form.expense_id);
            }
            Json(StatusMessage::new("Expense Updated")).into_response()
        }
        Err(error) => {
            tracing::error!("Could not update expense with {form:?}: {error}");
            Json(StatusMessage::new("Expense Not Updated")).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;
    use serde_json::Value;

    use crate::{
        employee::create_employee,
        expense::{
            create_expense, get_expense,
            update_endpoint::{UpdateExpenseForm, UpdateExpenseState},
            update_expense_endpoint,
        },
        initialize_db,
    };

    fn get_test_state() -> UpdateExpenseState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).expect("could not initialize test DB");
        create_employee("Jane Doe", &connection).expect("could not create test employee");

        UpdateExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn updates_expense_and_reports_success() {
        let state = get_test_state();
        let id = {
            let connection = state.db_connection.lock().unwrap();
            create_expense("Coffee", 4.50, 1, &connection).unwrap()
        };
        let form = UpdateExpenseForm {
            expense_id: id,
            description: "Espresso".to_owned(),
            amount: 5.25,
            employee_id: 1,
        };

        let response = update_expense_endpoint(State(state.clone()), Json(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(must_get_message(response).await, "Expense Updated");

        let connection = state.db_connection.lock().unwrap();
        let expense = get_expense(id, &connection).unwrap().unwrap();
        assert_eq!(expense.description, "Espresso");
        assert_eq!(expense.amount, 5.25);
    }

    #[tokio::test]
    async fn unknown_id_still_reports_success() {
        let state = get_test_state();
        let id = {
            let connection = state.db_connection.lock().unwrap();
            create_expense("Coffee", 4.50, 1, &connection).unwrap()
        };
        let form = UpdateExpenseForm {
            expense_id: id + 99,
            description: "Espresso".to_owned(),
            amount: 5.25,
            employee_id: 1,
        };

        let response = update_expense_endpoint(State(state.clone()), Json(form))
            .await
            .into_response();

        assert_eq!(must_get_message(response).await, "Expense Updated");

        // The existing data set is unmodified.
        let connection = state.db_connection.lock().unwrap();
        let expense = get_expense(id, &connection).unwrap().unwrap();
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, 4.50);
    }

    #[tokio::test]
    async fn reports_failure_for_invalid_amount() {
        let state = get_test_state();
        let id = {
            let connection = state.db_connection.lock().unwrap();
            create_expense("Coffee", 4.50, 1, &connection).unwrap()
        };
        let form = UpdateExpenseForm {
            expense_id: id,
            description: "Espresso".to_owned(),
            amount: 5.255,
            employee_id: 1,
        };

        let response = update_expense_endpoint(State(state.clone()), Json(form))
            .await
            .into_response();

        assert_eq!(must_get_message(response).await, "Expense Not Updated");

        let connection = state.db_connection.lock().unwrap();
        let expense = get_expense(id, &connection).unwrap().unwrap();
        assert_eq!(expense.description, "Coffee");
    }

    async fn must_get_message(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");
        let json: Value = serde_json::from_slice(&body).expect("response body was not JSON");

        json["message"]
            .as_str()
            .expect("response body had no message field")
            .to_owned()
    }
}
