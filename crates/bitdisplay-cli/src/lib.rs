//! # bitdisplay-cli: Command-Line Interface
//!
//! Runs the engines locally and prints their decisions as pretty JSON.
//!
//! ## Subcommands
//!
//! - `identicon`, `avatar`, `layout`: composition ([`compose`])
//! - `classify`, `charset`, `metadata`: classification ([`classify`])
//!
//! Argument parsing lives next to each handler; handlers return a
//! `serde_json::Value` and never print, so `main` owns stdout.

pub mod classify;
pub mod compose;
