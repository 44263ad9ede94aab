//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up glb-zones defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `prefix` - Optional zone prefix to set as default
/// * `output_dir` - Optional output directory to set as default
/// * `show` - If true, show current configuration
pub fn handle(prefix: Option<String>, output_dir: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        print!("{}", describe(&config));
        if let Ok(path) = Config::config_path() {
            println!("Config file: {}", path.display());
        }
        return Ok(());
    }

    if !apply(&mut config, prefix, output_dir) {
        show_usage();
        return Ok(());
    }

    config.save()?;
    print!("{}", describe(&config));
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Merge provided values into the config; false if nothing was given
fn apply(config: &mut Config, prefix: Option<String>, output_dir: Option<PathBuf>) -> bool {
    let changed = prefix.is_some() || output_dir.is_some();

    if let Some(prefix) = prefix {
        config.prefix = Some(prefix);
    }
    if let Some(dir) = output_dir {
        config.output_dir = Some(dir);
    }

    changed
}

fn describe(config: &Config) -> String {
    let prefix = match &config.prefix {
        Some(p) => format!("Zone prefix: {}\n", p),
        None => format!("Zone prefix: {} (default)\n", glb_zones::DEFAULT_PREFIX),
    };
    let output_dir = match &config.output_dir {
        Some(d) => format!("Output directory: {}\n", d.display()),
        None => "Output directory: . (default)\n".to_string(),
    };
    prefix + &output_dir
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: glb-zones configure --prefix ZONE_ --output-dir DIR");
    println!("   or: glb-zones configure --show");
}
