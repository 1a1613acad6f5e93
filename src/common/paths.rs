use anyhow::{Context, Result};
use std::path::PathBuf;

/// Centralized path management for davinci-helper

const APP_DIR: &str = "davinci_helper";

/// Environment override for the config file location
pub const CONFIG_ENV: &str = "DAVINCI_HELPER_CONFIG";

/// Default location of the distribution descriptor
pub const OS_RELEASE: &str = "/etc/os-release";

/// Settings directory (~/.config/davinci_helper). Not created here.
pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join(APP_DIR))
}

/// Config file path, honouring `DAVINCI_HELPER_CONFIG`
pub fn config_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Data directory used for the command log, created on demand
pub fn data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
            home.join(".local/share")
        })
        .join(APP_DIR);

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory at {}", data_dir.display()))?;

    Ok(data_dir)
}
