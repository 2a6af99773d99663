pub mod api_connection;
pub mod cli;
pub mod config;
pub mod fallback;
pub mod matching;
pub mod recipe_search;
pub mod server;
pub mod subscribers;
