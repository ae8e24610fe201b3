//! Outline command handler

use super::curriculum::load_indices;
use curriculum_tags::config::Config;
use curriculum_tags::core::report::{ReportContext, ReportFormat};
use curriculum_tags::{error, info};
use std::path::{Path, PathBuf};

/// Run the outline command
pub fn run(
    input_file: &Path,
    subject: Option<String>,
    output: Option<&Path>,
    format: &str,
    config: &Config,
) {
    match generate(input_file, subject, output, format, config) {
        Ok(path) => println!("✓ Outline generated: {}", path.display()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Subjects may contain characters that are awkward in file names
fn file_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// Generate an outline report and return the path written
///
/// # Errors
/// Returns a user-facing message if the format is unknown, the payload cannot be
/// loaded, or the report cannot be written.
pub fn generate(
    input_file: &Path,
    subject: Option<String>,
    output: Option<&Path>,
    format: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let report_format: ReportFormat = format.parse().map_err(|e| format!("✗ {e}"))?;
    let (indices, source) = load_indices(input_file, subject, config)?;

    let output_path = if let Some(path) = output {
        path.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        let stem = input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("curriculum");
        reports_dir.join(format!(
            "{stem}_{}.{}",
            file_safe(&indices.subject),
            report_format.extension()
        ))
    };

    let ctx = ReportContext::new(&indices, &source);
    report_format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| {
            error!("Outline generation failed: {e}");
            format!("✗ Failed to write {}: {e}", output_path.display())
        })?;

    info!("Wrote {report_format} outline to {}", output_path.display());
    Ok(output_path)
}
