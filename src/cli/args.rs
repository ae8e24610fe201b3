//! CLI argument definitions for `curtags`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use curriculum_tags::config::ConfigOverrides;
use curriculum_tags::core::session::Focus;
use curriculum_tags::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Control holding keyboard focus while replaying keys
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FocusArg {
    /// Page body
    Document,
    /// Text input field
    Input,
    /// Text area
    Textarea,
    /// Select box
    Select,
}

impl From<FocusArg> for Focus {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::Document => Self::Document,
            FocusArg::Input => Self::TextInput,
            FocusArg::Textarea => Self::TextArea,
            FocusArg::Select => Self::Select,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `subject`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (asks for confirmation unless `--yes`).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the subjects of a curriculum payload with day and tag totals.
    Subjects {
        /// Path to a saved curriculum payload (JSON)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Show per-day tag counts, the tag-to-topic index and the navigation order.
    Tags {
        /// Path to a saved curriculum payload (JSON)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Subject to index (defaults to config `subject`)
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// Show the previous and next tags of a tag.
    Neighbors {
        /// Path to a saved curriculum payload (JSON)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Tag to start from, e.g. `Day-1:2`
        #[arg(short, long)]
        tag: String,

        /// Subject to index (defaults to config `subject`)
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// Replay arrow-key presses from a tag and print each route visited.
    Navigate {
        /// Path to a saved curriculum payload (JSON)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Tag displayed before the first key press
        #[arg(short, long)]
        from: String,

        /// Keys to press in order (`left`, `right`, `ArrowLeft`, ...)
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        keys: Vec<String>,

        /// Control holding focus while keys are pressed
        #[arg(long, value_enum, default_value = "document")]
        focus: FocusArg,

        /// Subject to index (defaults to config `subject`)
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// Generate a day-by-day outline report for one subject.
    Outline {
        /// Path to a saved curriculum payload (JSON)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Subject to outline (defaults to config `subject`)
        #[arg(short, long)]
        subject: Option<String>,

        /// Output file path (optional; defaults to `reports_dir`/<file>_<subject>.<ext>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "curtags",
    about = "Curriculum tag sequencer command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the question type used in navigation routes
    #[arg(long = "question-type", value_name = "TYPE")]
    pub question_type: Option<String>,

    /// Override the curriculum directory searched for bare file names
    #[arg(long = "curriculum-dir", value_name = "DIR")]
    pub curriculum_dir: Option<PathBuf>,

    /// Override the reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            question_type: self.question_type.clone(),
            curriculum_dir: self
                .curriculum_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            question_type: None,
            curriculum_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_focus_arg_conversion() {
        assert_eq!(Focus::from(FocusArg::Document), Focus::Document);
        assert_eq!(Focus::from(FocusArg::Input), Focus::TextInput);
        assert_eq!(Focus::from(FocusArg::Textarea), Focus::TextArea);
        assert_eq!(Focus::from(FocusArg::Select), Focus::Select);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.question_type.is_none());
        assert!(overrides.curriculum_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/curtags.log"));
        cli.config_verbose = Some(true);
        cli.question_type = Some("coding".to_string());
        cli.reports_dir = Some(PathBuf::from("/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/curtags.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.question_type, Some("coding".to_string()));
        assert_eq!(overrides.reports_dir, Some("/out".to_string()));
    }

    #[test]
    fn test_parse_navigate_keys() {
        let cli = Cli::try_parse_from([
            "curtags",
            "navigate",
            "payload.json",
            "--from",
            "Day-1:1",
            "--keys",
            "right,right,left",
        ])
        .unwrap();
        match cli.command {
            Command::Navigate { keys, focus, .. } => {
                assert_eq!(keys, vec!["right", "right", "left"]);
                assert_eq!(focus, FocusArg::Document);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
