use std::path::{Path, PathBuf};
use std::sync::Mutex;

use expense_core::{
    config::ConfigManager, core::session::Session, storage::json_backend::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Registers a fresh data directory unique to one test.
pub fn setup_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a session against an existing data directory.
pub fn session_at(base: &Path) -> Session {
    let storage =
        JsonStorage::new(Some(base.to_path_buf()), Some(3)).expect("create json storage backend");
    let config_manager =
        ConfigManager::with_base_dir(base.to_path_buf()).expect("create config manager");
    Session::open(Box::new(storage), config_manager).expect("open session")
}

#[allow(dead_code)]
pub fn setup_session() -> Session {
    let base = setup_base();
    session_at(&base)
}
