//! Tag navigator
//!
//! Computes the previous/next tag of a displayed tag, crossing day boundaries
//! to the nearest day present in the grouping. Results are addresses only.

use super::grouping::CurriculumIndices;
use crate::core::models::tag::Tag;
use crate::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Traversal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices/days
    Next,
    /// Towards lower indices/days
    Prev,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" | "right" | "n" => Ok(Self::Next),
            "prev" | "previous" | "left" | "p" => Ok(Self::Prev),
            _ => Err(format!("Unknown direction: {s}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Prev => write!(f, "prev"),
        }
    }
}

/// Adjacent tags of a displayed tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    /// Following tag, `None` at the end of the sequence
    pub next: Option<Tag>,
    /// Preceding tag, `None` at the start of the sequence
    pub prev: Option<Tag>,
}

impl Neighbors {
    /// Neighbor in `direction`
    #[must_use]
    pub const fn toward(&self, direction: Direction) -> Option<Tag> {
        match direction {
            Direction::Next => self.next,
            Direction::Prev => self.prev,
        }
    }
}

/// Compute the neighbors of `current_tag`
///
/// Malformed tags (no `day-` marker, or not `day-<n>:<k>`) yield no neighbors.
#[must_use]
pub fn neighbors(current_tag: &str, indices: &CurriculumIndices) -> Neighbors {
    let Some(current) = Tag::parse(current_tag) else {
        debug!("Cannot navigate from malformed tag '{current_tag}'");
        return Neighbors::default();
    };
    neighbors_of(current, indices)
}

/// [`neighbors`] for an already-parsed tag
#[must_use]
pub fn neighbors_of(current: Tag, indices: &CurriculumIndices) -> Neighbors {
    let days = indices.day_numbers();
    let Tag { day, index } = current;

    let next = if index < indices.tag_count(day) {
        Some(Tag::new(day, index + 1))
    } else {
        days.iter()
            .copied()
            .find(|&d| d > day)
            .map(|d| Tag::new(d, 1))
    };

    let prev = if index > 1 {
        Some(Tag::new(day, index - 1))
    } else {
        days.iter()
            .copied()
            .rev()
            .find(|&d| d < day)
            .and_then(|d| {
                let count = indices.tag_count(d);
                (count > 0).then(|| Tag::new(d, count))
            })
    };

    Neighbors { next, prev }
}

/// First tag of the earliest day with registered tags
#[must_use]
pub fn first_tag(indices: &CurriculumIndices) -> Option<Tag> {
    indices
        .day_numbers()
        .into_iter()
        .find(|&d| indices.tag_count(d) > 0)
        .map(|d| Tag::new(d, 1))
}

/// Last tag of the latest day with registered tags
#[must_use]
pub fn last_tag(indices: &CurriculumIndices) -> Option<Tag> {
    indices
        .day_numbers()
        .into_iter()
        .rev()
        .find(|&d| indices.tag_count(d) > 0)
        .map(|d| Tag::new(d, indices.tag_count(d)))
}

/// Every registered tag reachable by following `next` from [`first_tag`]
///
/// `next` can step onto `:1` of a day with no registered tags; such stops are
/// walked through but not listed.
#[must_use]
pub fn sequence(indices: &CurriculumIndices) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut cursor = first_tag(indices);
    while let Some(tag) = cursor {
        if indices.tag_count(tag.day) > 0 {
            tags.push(tag);
        }
        cursor = neighbors_of(tag, indices).next;
    }
    tags
}
