//! CLI subcommands.

pub mod bundle;
pub mod generate;
