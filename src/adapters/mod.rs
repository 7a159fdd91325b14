pub mod api_errors;
pub mod stripe;
pub mod transactions;
