pub mod course;
pub mod mock;
pub mod search_api;
