pub mod book;
pub mod cli;
pub mod config;
pub mod db;
pub mod logging;
pub mod logic;
pub mod models;
pub mod templates;

pub use db::Database;
