pub mod common;
pub mod seed;
pub mod statistics;
pub mod transaction;

pub use common::*;
pub use seed::*;
pub use statistics::*;
pub use transaction::*;
