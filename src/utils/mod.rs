pub mod month;
pub mod pagination;

pub use month::*;
pub use pagination::*;
