//! Outline report generation
//!
//! Renders the day-grouped view of one subject as Markdown or HTML, the same
//! table the tester console shows: one row per topic with its subtopics, their
//! tags and whether their content has been authored.

pub mod formats;

use crate::core::models::tag::Tag;
use crate::core::sequencer::{first_tag, last_tag, CurriculumIndices};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for outline rendering
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Indices of the reported subject
    pub indices: &'a CurriculumIndices,
    /// Where the payload came from
    pub source: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(indices: &'a CurriculumIndices, source: &'a str) -> Self {
        Self { indices, source }
    }

    /// Reported subject
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.indices.subject
    }

    /// Number of day groups
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.indices.grouped_by_day.len()
    }

    /// Number of addressable subtopics
    #[must_use]
    pub fn tag_count(&self) -> u32 {
        self.indices.total_tags()
    }

    /// Addressable subtopics whose content is authored
    #[must_use]
    pub fn authored_count(&self) -> usize {
        self.indices
            .grouped_by_day
            .iter()
            .flat_map(|group| group.addressable())
            .filter(|(row, _, tag)| {
                row.original_sub_topics
                    .iter()
                    .any(|sub| sub.tag.as_deref() == Some(*tag) && sub.status)
            })
            .count()
    }

    /// First tag in navigation order, or `-`
    #[must_use]
    pub fn first_tag(&self) -> String {
        first_tag(self.indices).map_or_else(|| "-".to_string(), |t: Tag| t.to_string())
    }

    /// Last tag in navigation order, or `-`
    #[must_use]
    pub fn last_tag(&self) -> String {
        last_tag(self.indices).map_or_else(|| "-".to_string(), |t: Tag| t.to_string())
    }
}

/// Fill `{{name}}` placeholders in `template` in a single pass
///
/// Inserted values are never scanned again, so curriculum text containing
/// `{{...}}` is written literally. Unknown placeholders are left as they are.
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::curriculum::{CurriculumTable, DaySpec, SubtopicSpec};
    use crate::core::sequencer::build_indices;

    #[test]
    fn test_context_counts() {
        let mut table = CurriculumTable::new();
        table.insert_day(
            "chem",
            "a",
            DaySpec::new(
                "Atoms",
                vec![
                    SubtopicSpec::new("Protons", "Day-1:1", true),
                    SubtopicSpec::new("Neutrons", "Day-1:2", false),
                ],
            ),
        );
        let indices = build_indices(&table, "chem");
        let ctx = ReportContext::new(&indices, "chem.json");

        assert_eq!(ctx.subject(), "chem");
        assert_eq!(ctx.day_count(), 1);
        assert_eq!(ctx.tag_count(), 2);
        assert_eq!(ctx.authored_count(), 1);
        assert_eq!(ctx.first_tag(), "Day-1:1");
        assert_eq!(ctx.last_tag(), "Day-1:2");
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "# {{subject}} from {{source}} {{unknown}} {{open",
            &[
                ("subject", "Ops {{source}}".to_string()),
                ("source", "file.json".to_string()),
            ],
        );
        assert_eq!(filled, "# Ops {{source}} from file.json {{unknown}} {{open");
    }

    #[test]
    fn test_placeholder_text_in_curriculum_is_literal() {
        let mut table = CurriculumTable::new();
        table.insert_day(
            "{{warnings}}",
            "a",
            DaySpec::new(
                "Intro {{source}}",
                vec![SubtopicSpec::new("Braces", "Day-1:1", false)],
            ),
        );
        let indices = build_indices(&table, "{{warnings}}");
        let ctx = ReportContext::new(&indices, "payload.json");

        let markdown = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(markdown.contains("{{warnings}}"));
        assert!(markdown.contains("Intro {{source}}"));

        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("{{warnings}}"));
        assert!(html.contains("Intro {{source}}"));
    }

    #[test]
    fn test_empty_context_placeholders() {
        let indices = CurriculumIndices::default();
        let ctx = ReportContext::new(&indices, "none");
        assert_eq!(ctx.first_tag(), "-");
        assert_eq!(ctx.last_tag(), "-");
        assert_eq!(ctx.authored_count(), 0);
    }
}
