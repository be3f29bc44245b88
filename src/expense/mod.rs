//! The expense feature: domain types, database operations and the five HTTP
//! endpoints (list, read-one, create, update, delete).

mod core;
mod create_endpoint;
mod db;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use core::{Expense, ExpenseId, ExpenseJson, StatusMessage, validate_amount};
pub use create_endpoint::create_expense_endpoint;
pub use db::{
    create_expense, create_expense_table, delete_expense, get_expense, list_expenses,
    update_expense,
};
pub use delete_endpoint::delete_expense_endpoint;
pub use get_endpoint::get_expense_endpoint;
pub use list_endpoint::list_expenses_endpoint;
pub use update_endpoint::update_expense_endpoint;
