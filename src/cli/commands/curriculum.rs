//! Curriculum inspection commands: `subjects`, `tags`, `neighbors`

use curriculum_tags::config::Config;
use curriculum_tags::core::models::CurriculumTable;
use curriculum_tags::core::sequencer::{build_indices, neighbors, sequence, CurriculumIndices};
use curriculum_tags::core::session::navigation_url;
use curriculum_tags::core::source::{CurriculumSource, FileSource};
use curriculum_tags::{error, verbose, warn};
use std::path::Path;

/// Load the payload at `input_file` (resolved against `curriculum_dir`)
///
/// # Errors
/// Returns a user-facing message when the payload cannot be loaded.
pub fn load_table(input_file: &Path, config: &Config) -> Result<(CurriculumTable, String), String> {
    let source = FileSource::new(config.resolve_curriculum_path(input_file));
    let table = source.load().map_err(|e| {
        error!("Failed to load curriculum {}: {e}", source.describe());
        format!("✗ Failed to load {}: {e}", source.describe())
    })?;
    verbose!("✓ Curriculum loaded from: {}", source.describe());
    Ok((table, source.describe()))
}

/// Pick the subject from the flag or the configured default
///
/// # Errors
/// Returns a user-facing message when neither is set or the subject is unknown.
pub fn resolve_subject(
    subject: Option<String>,
    table: &CurriculumTable,
    config: &Config,
) -> Result<String, String> {
    let subject = subject
        .filter(|s| !s.trim().is_empty())
        .or_else(|| Some(config.tester.subject.clone()).filter(|s| !s.is_empty()))
        .ok_or_else(|| "✗ No subject given; pass --subject or set config `subject`.".to_string())?;

    if table.days(&subject).is_none() {
        let known: Vec<&str> = table.subjects().collect();
        warn!("Subject '{subject}' not found in curriculum");
        return Err(format!(
            "✗ Unknown subject '{subject}'. Available: {}",
            if known.is_empty() {
                "(none)".to_string()
            } else {
                known.join(", ")
            }
        ));
    }
    Ok(subject)
}

/// Load the payload and build indices for the chosen subject
///
/// # Errors
/// Returns a user-facing message when loading or subject resolution fails.
pub fn load_indices(
    input_file: &Path,
    subject: Option<String>,
    config: &Config,
) -> Result<(CurriculumIndices, String), String> {
    let (table, source) = load_table(input_file, config)?;
    let subject = resolve_subject(subject, &table, config)?;
    Ok((build_indices(&table, &subject), source))
}

fn report(result: Result<(), String>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Run the `subjects` command
pub fn run_subjects(input_file: &Path, config: &Config) {
    report(subjects(input_file, config));
}

fn subjects(input_file: &Path, config: &Config) -> Result<(), String> {
    let (table, _) = load_table(input_file, config)?;
    if table.is_empty() {
        println!("No subjects found.");
        return Ok(());
    }

    println!("{:<24} {:>6} {:>6}", "Subject", "Days", "Tags");
    for subject in table.subjects() {
        let indices = build_indices(&table, subject);
        println!(
            "{subject:<24} {:>6} {:>6}",
            indices.grouped_by_day.len(),
            indices.total_tags()
        );
    }
    Ok(())
}

/// Run the `tags` command
pub fn run_tags(input_file: &Path, subject: Option<String>, config: &Config) {
    report(tags(input_file, subject, config));
}

fn tags(input_file: &Path, subject: Option<String>, config: &Config) -> Result<(), String> {
    let (indices, _) = load_indices(input_file, subject, config)?;

    println!("\n=== Tags per day: {} ===", indices.subject);
    for group in &indices.grouped_by_day {
        let topics: Vec<&str> = group.rows.iter().map(|r| r.topics.as_str()).collect();
        println!(
            "{:<10} {:>4}  {}",
            group.day_order,
            indices.tag_count(group.day_number()),
            topics.join(" / ")
        );
    }

    println!("\n=== Tag → topic ===");
    for (tag, topic) in &indices.tag_to_topic {
        println!("{tag:<12} {topic}");
    }

    let order: Vec<String> = sequence(&indices).iter().map(ToString::to_string).collect();
    println!("\n=== Navigation order ({} tags) ===", order.len());
    println!("{}", order.join(" → "));

    let sparse = indices.sparse_days();
    if !sparse.is_empty() {
        warn!(
            "Non-contiguous tag indices in {}; navigation may skip or repeat subtopics",
            sparse.join(", ")
        );
    }
    Ok(())
}

/// Run the `neighbors` command
pub fn run_neighbors(input_file: &Path, tag: &str, subject: Option<String>, config: &Config) {
    report(show_neighbors(input_file, tag, subject, config));
}

fn show_neighbors(
    input_file: &Path,
    tag: &str,
    subject: Option<String>,
    config: &Config,
) -> Result<(), String> {
    let (indices, _) = load_indices(input_file, subject, config)?;
    let found = neighbors(tag, &indices);

    if let Some(topic) = indices.topic_for(tag) {
        println!("{tag} ({topic})");
    } else {
        println!("{tag}");
    }
    if found.next.is_none() && found.prev.is_none() {
        warn!("No neighbors for '{tag}'");
    }

    for (label, neighbor) in [("prev", found.prev), ("next", found.next)] {
        match neighbor {
            Some(t) => println!(
                "  {label}: {t:<10} {}",
                navigation_url(&config.tester.question_type, &indices.subject, &t)
            ),
            None => println!("  {label}: -"),
        }
    }
    Ok(())
}
