//! CLI subcommand implementations.

pub mod describe;
pub mod parse;
