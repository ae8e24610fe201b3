//! Tag and day-key model
//!
//! A tag addresses one subtopic as `Day-<n>:<k>` (1-based `k`). Parsing is
//! case-insensitive and searches for the pattern anywhere in the input, so
//! `"Review day-3:2"` still resolves to `Day-3:2`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"day-(\d+):(\d+)").expect("tag pattern is a valid regex"));

/// Canonical address of one subtopic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    /// Day number (`n` in `Day-<n>:<k>`)
    pub day: u32,
    /// 1-based position within the day (`k` in `Day-<n>:<k>`)
    pub index: u32,
}

impl Tag {
    /// Create a tag from its parts
    #[must_use]
    pub const fn new(day: u32, index: u32) -> Self {
        Self { day, index }
    }

    /// Parse a tag, case-insensitively
    ///
    /// # Returns
    /// `None` when the input has no `day-` marker or does not match `day-<n>:<k>`
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        if !lowered.contains("day-") {
            return None;
        }
        let caps = TAG_PATTERN.captures(&lowered)?;
        let day = caps.get(1)?.as_str().parse().ok()?;
        let index = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { day, index })
    }

    /// The day this tag belongs to
    #[must_use]
    pub const fn day_key(&self) -> DayKey {
        DayKey(self.day)
    }

    /// Lowercase form used as the `tag_to_topic` key
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("Day-{}:{}", self.day, self.index))
    }
}

/// A day number, displayed as the `Day-<n>` group key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(pub u32);

impl DayKey {
    /// Lowercase `day-<n>` key used for per-day tag counts
    #[must_use]
    pub fn lookup_key(&self) -> String {
        format!("day-{}", self.0)
    }

    /// Tag at `index` within this day
    #[must_use]
    pub const fn tag(&self, index: u32) -> Tag {
        Tag::new(self.0, index)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("Day-{}", self.0))
    }
}

/// Numeric suffix of a day-order label such as `Day-12`
///
/// Takes the text after the first `-` and reads its leading digits. Labels with no
/// `-` or no leading digits yield `0`.
#[must_use]
pub fn day_number(day_order: &str) -> u32 {
    let Some((_, suffix)) = day_order.split_once('-') else {
        return 0;
    };
    let digits: String = suffix
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Day-order label (`Day-<n>`) carried by a tag string: everything before the first `:`
#[must_use]
pub fn day_prefix(tag: &str) -> &str {
    tag.split(':').next().unwrap_or(tag)
}
