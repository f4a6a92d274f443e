use crate::cli::parser::Commands;
use crate::config::{migrate, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::process::Command;

/// View, check, migrate or edit the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, check, migrate: do_migrate, edit_config, editor } = cmd
    {
        let path = Config::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no config file at {:?}; run `fichajes init` first",
                path
            )));
        }

        if *print_config {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        }

        if *check {
            let missing = migrate::check(&path)?;
            if missing.is_empty() {
                success("Configuration is complete");
            } else {
                warning(format!("Missing config keys: {}", missing.join(", ")));
            }
        }

        if *do_migrate {
            migrate::run(&path)?;
        }

        if *edit_config {
            let ed = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(|| "nano".into());

            Command::new(ed)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
        }
    }
    Ok(())
}
