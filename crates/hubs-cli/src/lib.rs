//! CLI library components for the hub depth calculator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod settings;
pub mod summary;
pub mod types;
