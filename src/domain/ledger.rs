use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// The date-keyed collection of all expense records.
///
/// Days iterate in ascending calendar order; within a day, records keep
/// their insertion order. Invariant: no date key maps to an empty list;
/// a day is dropped eagerly when its last record is removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, Vec<Expense>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to `date`, creating the day on demand.
    pub fn add(&mut self, date: NaiveDate, expense: Expense) {
        self.days.entry(date).or_default().push(expense);
    }

    /// Removes the record at `index` within `date`'s list.
    ///
    /// A missing date or out-of-range index is a no-op returning `None`.
    pub fn remove_at(&mut self, date: NaiveDate, index: usize) -> Option<Expense> {
        let entries = self.days.get_mut(&date)?;
        if index >= entries.len() {
            return None;
        }
        let removed = entries.remove(index);
        if entries.is_empty() {
            self.days.remove(&date);
        }
        Some(removed)
    }

    pub fn expense_at(&self, date: NaiveDate, index: usize) -> Option<&Expense> {
        self.days.get(&date).and_then(|entries| entries.get(index))
    }

    /// Days in ascending calendar order, oldest first.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[Expense])> + '_ {
        self.days
            .iter()
            .map(|(date, entries)| (*date, entries.as_slice()))
    }

    /// Days in descending calendar order, newest first.
    pub fn days_newest_first(&self) -> impl Iterator<Item = (NaiveDate, &[Expense])> + '_ {
        self.days
            .iter()
            .rev()
            .map(|(date, entries)| (*date, entries.as_slice()))
    }

    pub fn day_total(&self, date: NaiveDate) -> f64 {
        self.days
            .get(&date)
            .map(|entries| entries.iter().map(|expense| expense.amount).sum())
            .unwrap_or(0.0)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn record_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_preserves_insertion_order_within_a_day() {
        let mut ledger = Ledger::new();
        let day = date(2024, 3, 1);
        ledger.add(day, Expense::new("Coffee", "food", 120.0));
        ledger.add(day, Expense::new("Bus", "travel", 45.0));

        assert_eq!(ledger.expense_at(day, 0).unwrap().description, "Coffee");
        assert_eq!(ledger.expense_at(day, 1).unwrap().description, "Bus");
    }

    #[test]
    fn removing_last_record_drops_the_day() {
        let mut ledger = Ledger::new();
        let day = date(2024, 3, 1);
        ledger.add(day, Expense::new("Coffee", "food", 120.0));

        let removed = ledger.remove_at(day, 0).expect("record exists");
        assert_eq!(removed.description, "Coffee");
        assert_eq!(ledger.day_count(), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_with_stale_target_is_a_noop() {
        let mut ledger = Ledger::new();
        let day = date(2024, 3, 1);
        ledger.add(day, Expense::new("Coffee", "food", 120.0));

        assert!(ledger.remove_at(day, 5).is_none());
        assert!(ledger.remove_at(date(2024, 3, 2), 0).is_none());
        assert_eq!(ledger.record_count(), 1);
    }

    #[test]
    fn days_iterate_in_calendar_order_regardless_of_insertion() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 3, 1), Expense::new("c", "x", 1.0));
        ledger.add(date(2024, 1, 5), Expense::new("a", "x", 1.0));
        ledger.add(date(2024, 2, 10), Expense::new("b", "x", 1.0));

        let dates: Vec<NaiveDate> = ledger.days().map(|(date, _)| date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 5), date(2024, 2, 10), date(2024, 3, 1)]
        );
    }
}
