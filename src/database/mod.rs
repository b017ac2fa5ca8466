pub mod connection;
pub mod filter;
pub mod memory;
pub mod sea_store;
pub mod store;

pub use connection::*;
pub use filter::*;
pub use memory::*;
pub use sea_store::*;
pub use store::*;
