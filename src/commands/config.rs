//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use folio::theme::current_theme;
use folio::Config;

/// Show effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let theme = current_theme();
    print!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write a default config file.
///
/// Refuses to overwrite an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        theme.success_text(&format!("Config written to {}", path.display()))
    );
    Ok(())
}
