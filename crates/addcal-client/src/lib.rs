//! CLI, configuration, event file loading
//!
//! This crate provides the `addcal` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod event_file;
