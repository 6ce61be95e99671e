//! CLI subcommands.

pub mod common;
pub mod frame;
pub mod simulate;
