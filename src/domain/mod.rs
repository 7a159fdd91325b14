pub mod error;
pub mod funding;
pub mod id;
pub mod repository;
