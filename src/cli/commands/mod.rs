//! CLI command handlers for `curtags`.
//!
//! Each subcommand is implemented in its own submodule; the curriculum
//! commands share loading and subject resolution from [`curriculum`].

pub mod config;
pub mod curriculum;
pub mod navigate;
pub mod outline;
