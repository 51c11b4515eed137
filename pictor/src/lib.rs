//! The `pictor` command line tool.
//!
//! [`ops`] holds the pipeline operations, [`reports`] their results, and
//! [`commands`] the clap front end tying both to a `pictor.toml`.

pub mod commands;
pub mod logging;
pub mod ops;
pub mod reports;
