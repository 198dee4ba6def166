use chrono::NaiveDate;

use crate::{
    core::errors::ExpenseError,
    domain::{Expense, Ledger},
    storage::StorageBackend,
};

/// Mutation front for the ledger: every change flushes the full ledger
/// to storage so no caller can forget the persist step.
pub struct LedgerService;

impl LedgerService {
    pub fn add(
        ledger: &mut Ledger,
        storage: &dyn StorageBackend,
        date: NaiveDate,
        expense: Expense,
    ) -> Result<(), ExpenseError> {
        ledger.add(date, expense);
        storage.save_ledger(ledger)
    }

    /// Removes the addressed record. A stale target is a no-op that
    /// also skips the flush.
    pub fn remove_at(
        ledger: &mut Ledger,
        storage: &dyn StorageBackend,
        date: NaiveDate,
        index: usize,
    ) -> Result<Option<Expense>, ExpenseError> {
        match ledger.remove_at(date, index) {
            Some(removed) => {
                storage.save_ledger(ledger)?;
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct NullStorage;

    impl StorageBackend for NullStorage {
        fn load_ledger(&self) -> crate::storage::Result<Ledger> {
            Ok(Ledger::new())
        }

        fn save_ledger(&self, _ledger: &Ledger) -> crate::storage::Result<()> {
            Ok(())
        }

        fn ledger_path(&self) -> PathBuf {
            PathBuf::from("/dev/null")
        }

        fn list_backups(&self) -> crate::storage::Result<Vec<crate::storage::BackupInfo>> {
            Ok(Vec::new())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_then_remove_leaves_no_empty_day() {
        let mut ledger = Ledger::new();
        let storage = NullStorage;
        let day = date(2024, 3, 1);

        LedgerService::add(&mut ledger, &storage, day, Expense::new("Tea", "food", 20.0))
            .unwrap();
        let removed = LedgerService::remove_at(&mut ledger, &storage, day, 0).unwrap();

        assert!(removed.is_some());
        assert!(ledger.is_empty());
    }

    #[test]
    fn stale_remove_is_a_noop() {
        let mut ledger = Ledger::new();
        let storage = NullStorage;
        let day = date(2024, 3, 1);
        LedgerService::add(&mut ledger, &storage, day, Expense::new("Tea", "food", 20.0))
            .unwrap();

        let removed = LedgerService::remove_at(&mut ledger, &storage, day, 7).unwrap();
        assert!(removed.is_none());
        assert_eq!(ledger.record_count(), 1);
    }
}
