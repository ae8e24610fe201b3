//! Data models for `curriculum-tags`

pub mod curriculum;
pub mod tag;

pub use curriculum::{CurriculumError, CurriculumTable, DaySpec, SubtopicSpec};
pub use tag::{DayKey, Tag};
