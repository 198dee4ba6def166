pub mod json_backend;

use std::path::PathBuf;

use crate::{core::errors::ExpenseError, domain::Ledger};

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Metadata for one ledger backup snapshot.
#[derive(Debug, Clone)]
pub struct BackupInfo {
    pub id: String,
    pub path: PathBuf,
}

/// Abstracts the durable store so sessions can be test-injected.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted ledger. Absent or unreadable data yields an
    /// empty ledger; this call must never fail the session over corrupt
    /// content.
    fn load_ledger(&self) -> Result<Ledger>;

    /// Serializes the full ledger and replaces the stored value.
    fn save_ledger(&self, ledger: &Ledger) -> Result<()>;

    fn ledger_path(&self) -> PathBuf;

    fn list_backups(&self) -> Result<Vec<BackupInfo>>;
}
