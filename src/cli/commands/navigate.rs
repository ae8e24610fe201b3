//! Navigate command handler
//!
//! Replays key presses through the tester session reducer, the same path the
//! console's keyboard listener takes.

use super::curriculum::{load_table, resolve_subject};
use curriculum_tags::config::Config;
use curriculum_tags::core::session::{Action, Effect, Focus, Key, NavState, TesterSession};
use curriculum_tags::{info, warn};
use std::path::Path;

/// Run the navigate command
pub fn run(
    input_file: &Path,
    from: &str,
    keys: &[String],
    focus: Focus,
    subject: Option<String>,
    config: &Config,
) {
    if let Err(e) = replay(input_file, from, keys, focus, subject, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn replay(
    input_file: &Path,
    from: &str,
    keys: &[String],
    focus: Focus,
    subject: Option<String>,
    config: &Config,
) -> Result<(), String> {
    let (table, _) = load_table(input_file, config)?;
    let subject = resolve_subject(subject, &table, config)?;

    let mut session = TesterSession::new(&config.tester.question_type, None, None);
    let Effect::Fetch { generation } = session.apply(Action::FetchIssued) else {
        return Err("✗ Session did not issue a fetch".to_string());
    };
    session.apply(Action::FetchCompleted {
        generation,
        result: Ok(table),
    });
    session.apply(Action::SelectSubject(subject));
    session.apply(Action::ShowTag(from.to_string()));

    println!("start: {from}");
    for raw in keys {
        let key = raw.parse::<Key>()?;
        match session.apply(Action::KeyPressed { key, focus }) {
            Effect::Navigate(request) => {
                info!("Navigated to {}", request.tag);
                let topic = session.current_topic().unwrap_or("-");
                println!("{raw:>6} → {:<10} {:<20} {}", request.tag, topic, request.url);
            }
            _ => println!("{raw:>6} → (no move)"),
        }
    }

    if let NavState::Displaying(tag) = session.nav() {
        println!("end: {tag}");
    }
    if focus.captures_arrows() {
        warn!("Arrow keys are ignored while focus is in a form control");
    }
    Ok(())
}
