//! Init command - write the default configuration file.

use console::style;
use totempack::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run() -> Result<(), CliError> {
    let (path, created) = ConfigFile::ensure_exists()?;

    if created {
        println!("{} {}", style("Created").green(), path.display());
    } else {
        println!(
            "{} {}",
            style("Configuration already exists:").yellow(),
            path.display()
        );
    }
    println!();
    println!("Edit this file to customize totempack settings.");
    println!("CLI arguments override config file values when specified.");
    Ok(())
}

/// Print the configuration file path.
pub fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}
