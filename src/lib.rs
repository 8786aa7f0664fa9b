pub mod commands;
pub mod config;
pub mod github;
pub mod render;
pub mod runtime;
pub mod selector;
