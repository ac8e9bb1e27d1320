use crate::errors::CliError;
use crate::utils::config::{self, AppConfig};
use crate::utils::{ensure_data_path, is_valid_data_path};
use camino::Utf8PathBuf;
use colored::Colorize;
use miette::Result;

fn update_config(update: impl FnOnce(&mut AppConfig)) -> Result<()> {
    let mut cfg = config::load_config();
    update(&mut cfg);
    config::save_config(&cfg).map_err(|source| CliError::ConfigSaveFailed { source })?;
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = config::load_config();
    let config_path = config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    println!();
    println!("  {} {}", "config_file:".bright_white(), config_path);

    match &cfg.data_path {
        Some(path) => {
            let status = if is_valid_data_path(path) {
                "✓".bright_green()
            } else {
                "✗".bright_red()
            };
            println!("  {} {} {}", "data_path:".bright_white(), path, status);
        }
        None => println!(
            "  {} {}",
            "data_path:".bright_white(),
            "(not set)".bright_yellow()
        ),
    }

    match cfg.build {
        Some(build) => println!("  {} {}", "build:".bright_white(), build),
        None => println!(
            "  {} {}",
            "build:".bright_white(),
            "(latest)".bright_yellow()
        ),
    }

    println!();
    Ok(())
}

pub fn set_data_path(path: String, build: Option<u32>) -> Result<()> {
    let path = Utf8PathBuf::from(path);
    ensure_data_path(&path)?;

    update_config(|cfg| {
        cfg.data_path = Some(path.clone());
        if build.is_some() {
            cfg.build = build;
        }
    })?;

    println!("{}", "✓ Data path set successfully!".bright_green().bold());
    println!();
    println!("  {} {}", "Path:".bright_white().bold(), path.as_str().bright_green());
    if let Some(build) = build {
        println!("  {} {}", "Build:".bright_white().bold(), build.to_string().bright_green());
    }

    Ok(())
}
