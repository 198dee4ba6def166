use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{
    core::utils::{app_data_dir, backups_dir_in, ensure_dir, ledger_file_in},
    domain::Ledger,
};

use super::{BackupInfo, Result, StorageBackend};

const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const BACKUP_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Filesystem-backed JSON persistence for the expense ledger.
///
/// The whole ledger is rewritten on every save (last full write wins);
/// the previous file is snapshotted into `backups/` first, keeping the
/// most recent `retention` snapshots.
#[derive(Clone)]
pub struct JsonStorage {
    ledger_file: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let backups_dir = backups_dir_in(&base);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            ledger_file: ledger_file_in(&base),
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    fn backup_existing_file(&self) -> Result<()> {
        if !self.ledger_file.exists() {
            return Ok(());
        }
        ensure_dir(&self.backups_dir)?;
        let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut name = format!("ledger_{timestamp}.{BACKUP_EXTENSION}");
        let mut counter = 1;
        while self.backups_dir.join(&name).exists() {
            name = format!("ledger_{timestamp}_{counter}.{BACKUP_EXTENSION}");
            counter += 1;
        }
        fs::copy(&self.ledger_file, self.backups_dir.join(&name))?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> Result<()> {
        let mut backups = self.list_backups()?;
        // list_backups returns newest first; everything past the
        // retention window goes.
        for stale in backups.split_off(self.retention.min(backups.len())) {
            fs::remove_file(&stale.path)?;
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_ledger(&self) -> Result<Ledger> {
        if !self.ledger_file.exists() {
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&self.ledger_file)?;
        match serde_json::from_str(&data) {
            Ok(ledger) => Ok(ledger),
            Err(err) => {
                tracing::warn!(
                    path = %self.ledger_file.display(),
                    error = %err,
                    "malformed ledger file, starting from an empty ledger"
                );
                Ok(Ledger::new())
            }
        }
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        self.backup_existing_file()?;
        let json = serde_json::to_string_pretty(ledger)?;
        write_atomic(&self.ledger_file, &json)
    }

    fn ledger_path(&self) -> PathBuf {
        self.ledger_file.clone()
    }

    fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(BackupInfo {
                    id: name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(entries)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stages the payload into a sibling temp file, then renames it over the
/// target so a failed write never corrupts the previous value.
fn write_atomic(path: &Path, data: &str) -> super::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
