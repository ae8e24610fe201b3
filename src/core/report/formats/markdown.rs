//! Markdown outline generator
//!
//! Produces GitHub-flavored tables, one per day group.

use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown outline template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/outline.md");

/// Markdown outline generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        fill_template(
            MARKDOWN_TEMPLATE,
            &[
                ("subject", ctx.subject().to_string()),
                ("source", ctx.source.to_string()),
                ("day_count", ctx.day_count().to_string()),
                ("tag_count", ctx.tag_count().to_string()),
                ("authored_count", ctx.authored_count().to_string()),
                ("first_tag", ctx.first_tag()),
                ("last_tag", ctx.last_tag()),
                ("day_table", Self::generate_day_table(ctx)),
                ("warnings", Self::generate_warnings(ctx)),
            ],
        )
    }

    /// Pipes would end the table cell early
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn generate_day_table(ctx: &ReportContext) -> String {
        if ctx.indices.is_empty() {
            return "_No days found for this subject._\n".to_string();
        }

        let mut table = String::new();
        for group in &ctx.indices.grouped_by_day {
            let count = ctx.indices.tag_count(group.day_number());
            let _ = writeln!(table, "### {} ({count} tags)\n", group.day_order);
            table.push_str("| Topic | Subtopic | Tag | Status |\n");
            table.push_str("|---|---|---|---|\n");

            for row in &group.rows {
                for sub in &row.original_sub_topics {
                    let title = sub.title.as_deref().unwrap_or("(untitled)");
                    let tag = sub.tag.as_deref().unwrap_or("-");
                    let status = if sub.status { "✓ authored" } else { "pending" };
                    let _ = writeln!(
                        table,
                        "| {} | {} | `{}` | {status} |",
                        Self::cell(&row.topics),
                        Self::cell(title),
                        Self::cell(tag)
                    );
                }
                if row.original_sub_topics.is_empty() {
                    let _ = writeln!(table, "| {} | - | - | - |", Self::cell(&row.topics));
                }
            }
            table.push('\n');
        }
        table
    }

    fn generate_warnings(ctx: &ReportContext) -> String {
        let sparse = ctx.indices.sparse_days();
        if sparse.is_empty() {
            return String::new();
        }
        format!(
            "> ⚠️ Tag indices are not contiguous for: {}. Navigation may skip or repeat subtopics.\n",
            sparse.join(", ")
        )
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
