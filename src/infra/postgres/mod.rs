pub mod delivery_funding_repo;
pub mod marqeta_transaction_repo;
