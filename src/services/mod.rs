pub mod transaction_processor;
