//! Subcommand implementations.

pub mod committees;
pub mod config;
pub mod events;
