pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod state;
pub mod tui;
pub mod ui;
