pub mod cache;
pub mod error;
pub mod news;
pub mod page;
