//! Command-line interface for the Remez binary.

pub mod args;
pub mod commands;
pub mod output;
