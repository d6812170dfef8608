use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

use opn::config::Config;

use super::Session;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
    /// Set a configuration value (e.g. open.command "code -r")
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<ExitCode> {
    let session = Session::load()?;
    let path = session.config_path();

    match action {
        ConfigAction::Show => {
            let pretty = toml::to_string_pretty(&session.config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = session.config;
            config.set_value(&key, &value)?;
            config.save_to(&path)?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            println!("{}", session.config.get_value(&key)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
