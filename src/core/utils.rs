use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use super::errors::ExpenseError;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const LEDGER_FILE: &str = "ledger.json";
const BACKUP_DIR: &str = "backups";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the single ledger entry inside a data directory.
pub fn ledger_file_in(base: &Path) -> PathBuf {
    base.join(LEDGER_FILE)
}

/// Directory holding timestamped ledger backups.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Path of the preferences entry inside a data directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), ExpenseError> {
    fs::create_dir_all(path)?;
    Ok(())
}
