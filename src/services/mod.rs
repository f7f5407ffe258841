pub mod bing_client;
pub mod result_shaper;
pub mod search_service;

pub use bing_client::*;
pub use result_shaper::*;
pub use search_service::*;
