//! Config command handler

use crate::args::ConfigSubcommand;
use curriculum_tags::config::Config;
use curriculum_tags::{error, info};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config, &format!("✓ Set {key} = {value}"))),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config, &format!("✓ Reset {key} to default"))),
        Some(ConfigSubcommand::Reset { yes }) => reset(yes),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===");
            println!("File: {}\n", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
    Ok(())
}

fn persist(config: &Config, done: &str) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Saving {} failed: {e}", Config::get_config_file_path().display());
        format!("Failed to save config: {e}")
    })?;
    info!("Config saved to {}", Config::get_config_file_path().display());
    println!("{done}");
    Ok(())
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

fn reset(skip_prompt: bool) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !skip_prompt && !confirm("Reset configuration to defaults?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    info!("Config file removed; defaults apply from the next run");
    println!("✓ Config reset to defaults");
    Ok(())
}
