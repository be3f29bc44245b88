//! Defines the endpoint for creating a new expense.

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
    expense::{StatusMessage, create_expense},
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseForm {
    /// What the expense was for.
    pub description: String,
    /// The amount in dollars.
    pub amount: f64,
    /// The employee the expense is recorded against.
    pub employee_id: EmployeeId,
}

/// A route handler for creating a new expense.
///
/// Responds with a fixed status body; the generated id is not reflected to
/// the client.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Json(form): Json<CreateExpenseForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Json(StatusMessage::new("Expense Not Created")).into_response();
        }
    };

    match create_expense(&form.description, form.amount, form.employee_id, &connection) {
        Ok(expense_id) => {
            tracing::debug!("created expense {expense_id}");
            Json(StatusMessage::new("Expense Created")).into_response()
        }
        Err(error) => {
            tracing::error!("Could not create expense with {form:?}: {error}");
            Json(StatusMessage::new("Expense Not Created")).into_response()
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
            create_endpoint::{CreateExpenseForm, CreateExpenseState},
            create_expense_endpoint, list_expenses,
        },
        initialize_db,
    };

    fn get_test_state() -> CreateExpenseState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).expect("could not initialize test DB");
        create_employee("Jane Doe", &connection).expect("could not create test employee");

        CreateExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn creates_expense_and_reports_success() {
        let state = get_test_state();
        let form = CreateExpenseForm {
            description: "Coffee".to_owned(),
            amount: 4.50,
            employee_id: 1,
        };

        let response = create_expense_endpoint(State(state.clone()), Json(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(must_get_message(response).await, "Expense Created");

        let connection = state.db_connection.lock().unwrap();
        let expenses = list_expenses(&connection).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].description, "Coffee");
        assert_eq!(expenses[0].amount, 4.50);
    }

    #[tokio::test]
    async fn reports_failure_for_unknown_employee() {
        let state = get_test_state();
        let form = CreateExpenseForm {
            description: "Coffee".to_owned(),
            amount: 4.50,
            employee_id: 42,
        };

        let response = create_expense_endpoint(State(state.clone()), Json(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(must_get_message(response).await, "Expense Not Created");

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_expenses(&connection).unwrap(), []);
    }

    #[tokio::test]
    async fn reports_failure_for_invalid_amount() {
        let state = get_test_state();
        let form = CreateExpenseForm {
            description: "Coffee".to_owned(),
            amount: -4.50,
            employee_id: 1,
        };

        let response = create_expense_endpoint(State(state.clone()), Json(form))
            .await
            .into_response();

        assert_eq!(must_get_message(response).await, "Expense Not Created");

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_expenses(&connection).unwrap(), []);
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
