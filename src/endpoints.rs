//! The API endpoints URIs.

/// The route for the expense collection: GET lists all expenses, POST
/// creates one, PUT updates one and DELETE removes one (the target id is
/// carried in the request body for PUT and DELETE).
pub const EXPENSES: &str = "/api/expenses";
/// The route for reading a single expense via the `expense_id` query
/// parameter.
pub const EXPENSE: &str = "/api/expense";
