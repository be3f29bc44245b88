//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expense_endpoint,
        list_expenses_endpoint, update_expense_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route allows any origin, method and headers: the API is consumed by
/// a statically hosted front end served from a different origin, and there
/// is no authentication anywhere in the system.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint)
                .post(create_expense_endpoint)
                .put(update_expense_endpoint)
                .delete(delete_expense_endpoint),
        )
        .route(endpoints::EXPENSE, get(get_expense_endpoint))
        .layer(cors)
        .with_state(state)
}
