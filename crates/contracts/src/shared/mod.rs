pub mod chat;
pub mod config;
pub mod data_view;
pub mod error;
pub mod progress;
