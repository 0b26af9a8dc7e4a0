//! CLI library components for the medscreen runner.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
