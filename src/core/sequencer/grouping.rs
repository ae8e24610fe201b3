//! Curriculum grouping
//!
//! Flattens one subject of a [`CurriculumTable`] into day-ordered rows and
//! derives the per-day tag counts and the tag → topic index used by the
//! navigator.

use crate::core::models::curriculum::{CurriculumTable, SubtopicSpec};
use crate::core::models::tag::{day_number, day_prefix, DayKey, Tag};
use crate::debug;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One backend day of a subject, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    /// Subject the row belongs to
    pub subject: String,
    /// Day-order label (`Day-<n>`) derived from the first subtopic's tag
    pub day_order: String,
    /// Topic label
    pub topics: String,
    /// Subtopic titles in authored order
    pub sub_topics: Vec<String>,
    /// Subtopics as received
    pub original_sub_topics: Vec<SubtopicSpec>,
}

/// Rows sharing one day-order label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    /// Day-order label, e.g. `Day-3`
    pub day_order: String,
    /// Rows in sorted order
    pub rows: Vec<DayRow>,
}

impl DayGroup {
    /// Numeric suffix of the label (`0` when not parsable)
    #[must_use]
    pub fn day_number(&self) -> u32 {
        day_number(&self.day_order)
    }

    /// Normalized key into [`CurriculumIndices::tag_count_per_day`]
    ///
    /// Labels like `Day-03` share the key `day-3` with `Day-3`.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        DayKey(self.day_number()).lookup_key()
    }

    /// Subtopics of every row that have both a title and a tag
    pub fn addressable(&self) -> impl Iterator<Item = (&DayRow, &str, &str)> {
        self.rows.iter().flat_map(|row| {
            row.original_sub_topics
                .iter()
                .filter_map(move |sub| sub.addressable().map(|(title, tag)| (row, title, tag)))
        })
    }
}

/// Derived view of one subject
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurriculumIndices {
    /// Subject the indices were built for
    pub subject: String,
    /// Day groups ordered by ascending day number
    pub grouped_by_day: Vec<DayGroup>,
    /// Lowercase day key (`day-<n>`) → number of addressable subtopics
    pub tag_count_per_day: BTreeMap<String, u32>,
    /// Normalized lowercase tag → owning topic label
    pub tag_to_topic: BTreeMap<String, String>,
}

impl CurriculumIndices {
    /// Group with the given day-order label
    #[must_use]
    pub fn group(&self, day_order: &str) -> Option<&DayGroup> {
        self.grouped_by_day
            .iter()
            .find(|g| g.day_order.eq_ignore_ascii_case(day_order))
    }

    /// Registered tag count of day `day` (`0` when unknown)
    #[must_use]
    pub fn tag_count(&self, day: u32) -> u32 {
        self.tag_count_per_day
            .get(&DayKey(day).lookup_key())
            .copied()
            .unwrap_or(0)
    }

    /// Topic owning `tag`, compared case-insensitively
    #[must_use]
    pub fn topic_for(&self, tag: &str) -> Option<&str> {
        self.tag_to_topic
            .get(&normalized_tag(tag))
            .map(String::as_str)
    }

    /// Sorted, distinct day numbers present in the grouping
    #[must_use]
    pub fn day_numbers(&self) -> Vec<u32> {
        self.grouped_by_day
            .iter()
            .map(DayGroup::day_number)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Total addressable subtopics across all days
    #[must_use]
    pub fn total_tags(&self) -> u32 {
        self.tag_count_per_day.values().sum()
    }

    /// Whether no day was found for the subject
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grouped_by_day.is_empty()
    }

    /// Day labels whose tags are not exactly `Day-<n>:1 ..= Day-<n>:<count>`
    ///
    /// Navigation assumes dense 1-based indices; a day listed here has tags the
    /// navigator will skip or visit twice.
    #[must_use]
    pub fn sparse_days(&self) -> Vec<String> {
        self.grouped_by_day
            .iter()
            .filter(|group| {
                let expected = self.tag_count(group.day_number());
                let seen: BTreeSet<u32> = group
                    .addressable()
                    .filter_map(|(_, _, tag)| Tag::parse(tag))
                    .filter(|tag| tag.day == group.day_number())
                    .map(|tag| tag.index)
                    .collect();
                seen != (1..=expected).collect::<BTreeSet<_>>()
            })
            .map(|group| group.day_order.clone())
            .collect()
    }
}

/// `day-<n>:<k>` without zero padding; unparsable tags are only lowercased
fn normalized_tag(tag: &str) -> String {
    Tag::parse(tag).map_or_else(|| tag.to_lowercase(), |t| t.lookup_key())
}

fn day_order_for(day_id: &str, sub_topics: &[SubtopicSpec]) -> String {
    sub_topics
        .first()
        .and_then(|first| first.tag.as_deref())
        .map_or_else(|| format!("Day-{day_id}"), |tag| day_prefix(tag).to_string())
}

/// Build the grouped view and lookup indices for `subject`
///
/// Unknown subjects and empty tables produce empty indices. Day counts are the
/// sum over every topic that shares the day.
#[must_use]
pub fn build_indices(table: &CurriculumTable, subject: &str) -> CurriculumIndices {
    let mut indices = CurriculumIndices {
        subject: subject.to_string(),
        ..CurriculumIndices::default()
    };
    let Some(days) = table.days(subject) else {
        debug!("No curriculum days for subject '{subject}'");
        return indices;
    };

    let mut rows: Vec<DayRow> = days
        .iter()
        .map(|(day_id, spec)| DayRow {
            subject: subject.to_string(),
            day_order: day_order_for(day_id, &spec.sub_topics),
            topics: spec.topics.clone(),
            sub_topics: spec
                .sub_topics
                .iter()
                .filter_map(|sub| sub.title.clone())
                .collect(),
            original_sub_topics: spec.sub_topics.clone(),
        })
        .collect();
    rows.sort_by_key(|row| day_number(&row.day_order));

    for row in rows {
        match indices
            .grouped_by_day
            .iter_mut()
            .find(|group| group.day_order == row.day_order)
        {
            Some(group) => group.rows.push(row),
            None => indices.grouped_by_day.push(DayGroup {
                day_order: row.day_order.clone(),
                rows: vec![row],
            }),
        }
    }

    for group in &indices.grouped_by_day {
        let day_key = group.lookup_key();
        for (row, _, tag) in group.addressable() {
            indices
                .tag_to_topic
                .insert(normalized_tag(tag), row.topics.clone());
            *indices.tag_count_per_day.entry(day_key.clone()).or_insert(0) += 1;
        }
    }

    debug!(
        "Built indices for '{subject}': {} day(s), {} tag(s)",
        indices.grouped_by_day.len(),
        indices.total_tags()
    );
    indices
}
