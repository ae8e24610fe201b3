//! Core module: configuration, curriculum model, sequencing and reporting

pub mod config;
pub mod models;
pub mod report;
pub mod sequencer;
pub mod session;
pub mod source;

/// Returns the current version of the `curriculum-tags` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
