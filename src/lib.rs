pub mod api;
pub mod app;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod session;
pub mod status_indicator;
pub mod store;
pub mod theme;
pub mod typewriter;
pub mod ui;
