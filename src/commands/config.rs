//! Config subcommands handler

use anyhow::Result;

use mousecap::cli::ConfigAction;
use mousecap::Config;

pub fn handle(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => handle_show(),
        ConfigAction::Path => handle_path(),
    }
}

/// Show the effective configuration as TOML.
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print the config file path.
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
