//! Command-line interface for `topopts`.

pub mod args;
pub mod commands;
