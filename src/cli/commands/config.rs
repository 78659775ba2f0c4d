use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("Config serialization: {e}")))?;
            println!("{}", yaml);
        }

        // ---- CHECK ----
        if *check {
            migrate::check()?;
        }

        // ---- MIGRATE ----
        if *do_migrate {
            migrate::migrate()?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let chosen = editor.clone().unwrap_or(default_editor);

            let status = Command::new(&chosen)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("Failed to launch '{chosen}': {e}")))?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "Editor '{chosen}' exited with an error"
                )));
            }
        }
    }

    Ok(())
}
