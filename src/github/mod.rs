pub mod client;
pub mod paging;
pub mod types;
