use chrono::NaiveDate;

use crate::{
    config::{Config, ConfigManager},
    domain::{Expense, Ledger},
    storage::{json_backend::JsonStorage, StorageBackend},
};

use super::{errors::ExpenseError, services::LedgerService};

/// Owns the in-memory ledger, the storage backend, and the persisted
/// preferences for the lifetime of one run.
///
/// The ledger is loaded in full at startup and flushed in full after
/// every mutation; no other component holds mutable state.
pub struct Session {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    config: Config,
    config_manager: ConfigManager,
}

impl Session {
    pub fn open_default() -> Result<Self, ExpenseError> {
        let storage = JsonStorage::new_default()?;
        let config_manager = ConfigManager::new()?;
        Self::open(Box::new(storage), config_manager)
    }

    pub fn open(
        storage: Box<dyn StorageBackend>,
        config_manager: ConfigManager,
    ) -> Result<Self, ExpenseError> {
        let ledger = storage.load_ledger()?;
        let config = config_manager.load();
        Ok(Self {
            ledger,
            storage,
            config,
            config_manager,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn add_expense(&mut self, date: NaiveDate, expense: Expense) -> Result<(), ExpenseError> {
        LedgerService::add(&mut self.ledger, self.storage.as_ref(), date, expense)
    }

    pub fn remove_expense(
        &mut self,
        date: NaiveDate,
        index: usize,
    ) -> Result<Option<Expense>, ExpenseError> {
        LedgerService::remove_at(&mut self.ledger, self.storage.as_ref(), date, index)
    }

    pub fn expense_at(&self, date: NaiveDate, index: usize) -> Option<&Expense> {
        self.ledger.expense_at(date, index)
    }

    pub fn theme_flag(&self) -> Option<&str> {
        self.config.theme.as_deref()
    }

    /// Persists the theme flag immediately, as every toggle must.
    pub fn set_theme_flag(&mut self, flag: &str) -> Result<(), ExpenseError> {
        self.config.theme = Some(flag.to_string());
        self.config_manager.save(&self.config)
    }
}
