//! Curriculum tag sequencer
//!
//! [`build_indices`] turns one subject of a curriculum table into a day-ordered
//! grouping plus lookup tables; [`neighbors`] walks the resulting tag order.

pub mod grouping;
pub mod navigator;

pub use grouping::{build_indices, CurriculumIndices, DayGroup, DayRow};
pub use navigator::{first_tag, last_tag, neighbors, neighbors_of, sequence, Direction, Neighbors};
