use anyhow::Result;

use crate::ConfigCommands;
use crate::common::config::Config;
use crate::ui::prelude::*;

pub fn handle_config_command(command: ConfigCommands) -> Result<()> {
    let path = Config::path()?;
    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Init => {
            if path.exists() {
                emit(
                    Level::Info,
                    "config.exists",
                    &format!("Config already exists at {}", path.display()),
                    None,
                );
                return Ok(());
            }
            Config::default().save_to(&path)?;
            emit(
                Level::Success,
                "config.created",
                &format!("✓ Wrote default config to {}", path.display()),
                None,
            );
        }
    }
    Ok(())
}
