pub mod query_builder;
pub mod seed_service;
pub mod statistics_service;
pub mod transaction_service;

pub use query_builder::*;
pub use seed_service::*;
pub use statistics_service::*;
pub use transaction_service::*;
