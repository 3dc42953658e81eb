pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod tools;
