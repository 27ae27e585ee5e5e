use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::FiscalError;

const DEFAULT_DIR_NAME: &str = ".fiscalizer";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.fiscalizer`.
/// `FISCALIZER_HOME` overrides it, which is also how tests redirect storage.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FISCALIZER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the persisted application configuration under `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), FiscalError> {
    fs::create_dir_all(path)?;
    Ok(())
}
