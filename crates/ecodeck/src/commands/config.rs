use std::path::Path;

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{Config, KEYS};
use crate::controller::DEFAULT_INTERVAL;

pub fn run(command: ConfigCommands, quiet: bool) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value, quiet),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    if path.exists() {
        let config = Config::load_from(&path)?;
        print!("{}", serde_yaml::to_string(&config)?);
    } else {
        println!("{}", "No config file yet. Built-in defaults:".dimmed());
        println!("  defaults.autoplay: false");
        println!("  defaults.interval: {}", DEFAULT_INTERVAL.as_secs());
        println!("  defaults.start_slide: 1");
        println!("  defaults.transition: slide");
    }
    println!();
    println!("{} {}", "Keys:".dimmed(), KEYS.join(", ").dimmed());
    Ok(())
}

fn set(key: &str, value: &str, quiet: bool) -> anyhow::Result<()> {
    let path = Config::path()?;
    set_at(&path, key, value)?;
    if !quiet {
        println!("{}", format!("Set {key} = {value}").green());
    }
    Ok(())
}

/// Update one key in the config file at `path`, creating it if needed.
fn set_at(path: &Path, key: &str, value: &str) -> anyhow::Result<Config> {
    let mut config = if path.exists() {
        Config::load_from(path)?
    } else {
        Config::default()
    };
    config.set(key, value)?;
    config.save_to(path)?;
    tracing::debug!(path = %path.display(), key, value, "config saved");
    Ok(config)
}
