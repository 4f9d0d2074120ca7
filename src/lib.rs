pub mod api;
pub mod config;
pub mod directory;
pub mod models;
