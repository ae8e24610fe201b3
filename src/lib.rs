//! Shared library for `curriculum-tags`
//! Curriculum grouping, tag navigation and the tester session state used by the `curtags` CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
