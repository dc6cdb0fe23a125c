//! Subcommand implementations.

pub mod buttons;
pub mod config;
pub mod link;
pub mod style;
