pub mod config;
pub mod news_mapper;
pub mod state;
