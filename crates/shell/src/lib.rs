//! `fabula-shell` library crate.
//!
//! Command parsing and rendering are exposed here so they can be unit
//! tested; the binary entrypoint lives in `main.rs`.

pub mod command;
pub mod config;
pub mod render;
pub mod repl;
