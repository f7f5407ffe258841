pub mod common;
pub mod search;

pub use common::*;
pub use search::*;
