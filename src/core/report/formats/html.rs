//! HTML outline generator
//!
//! Generates a self-contained page with embedded CSS. All curriculum text is
//! escaped before insertion.

use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML outline template
const HTML_TEMPLATE: &str = include_str!("../templates/outline.html");

/// HTML outline generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        fill_template(
            HTML_TEMPLATE,
            &[
                ("subject", escape(ctx.subject())),
                ("source", escape(ctx.source)),
                ("day_count", ctx.day_count().to_string()),
                ("tag_count", ctx.tag_count().to_string()),
                ("authored_count", ctx.authored_count().to_string()),
                ("first_tag", ctx.first_tag()),
                ("last_tag", ctx.last_tag()),
                ("day_table", Self::generate_day_html(ctx)),
                ("warnings", Self::generate_warnings(ctx)),
            ],
        )
    }

    fn generate_day_html(ctx: &ReportContext) -> String {
        if ctx.indices.is_empty() {
            return "<p><em>No days found for this subject.</em></p>\n".to_string();
        }

        let mut html = String::new();
        for group in &ctx.indices.grouped_by_day {
            let count = ctx.indices.tag_count(group.day_number());
            let _ = writeln!(
                html,
                "<h3>{} <small>({count} tags)</small></h3>",
                escape(&group.day_order)
            );
            html.push_str("<table>\n  <tr><th>Topic</th><th>Subtopics</th></tr>\n");

            for row in &group.rows {
                let mut items = String::new();
                for sub in &row.original_sub_topics {
                    let title = sub.title.as_deref().unwrap_or("(untitled)");
                    let tag = sub.tag.as_deref().unwrap_or("-");
                    let (class, mark) = if sub.status { ("done", "✓") } else { ("todo", "…") };
                    let _ = write!(
                        items,
                        "<li class=\"{class}\">{mark} {} <span class=\"tag\">{}</span></li>",
                        escape(title),
                        escape(tag)
                    );
                }
                let _ = writeln!(
                    html,
                    "  <tr><td>{}</td><td><ul>{items}</ul></td></tr>",
                    escape(&row.topics)
                );
            }
            html.push_str("</table>\n");
        }
        html
    }

    fn generate_warnings(ctx: &ReportContext) -> String {
        let sparse = ctx.indices.sparse_days();
        if sparse.is_empty() {
            return String::new();
        }
        format!(
            "<p class=\"warning\">Tag indices are not contiguous for: {}. Navigation may skip or repeat subtopics.</p>\n",
            escape(&sparse.join(", "))
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::curriculum::{CurriculumTable, DaySpec, SubtopicSpec};
    use crate::core::sequencer::build_indices;
    use tempfile::TempDir;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_render_escapes_curriculum_text() {
        let mut table = CurriculumTable::new();
        table.insert_day(
            "web",
            "1",
            DaySpec::new("<script>", vec![SubtopicSpec::new("Tags & Attributes", "Day-1:1", true)]),
        );
        let indices = build_indices(&table, "web");
        let ctx = ReportContext::new(&indices, "web.json");

        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Tags &amp; Attributes"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outline.html");
        let indices = build_indices(&CurriculumTable::new(), "web");
        let ctx = ReportContext::new(&indices, "web.json");

        HtmlReporter::new().generate(&ctx, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
