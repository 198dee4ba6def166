use chrono::{Datelike, NaiveDate};

use crate::domain::Ledger;

/// Derived aggregates, recomputed in full from the ledger on demand.
pub struct SummaryService;

impl SummaryService {
    /// Sum of every record across all days.
    pub fn lifetime_total(ledger: &Ledger) -> f64 {
        ledger
            .days()
            .map(|(_, entries)| entries.iter().map(|expense| expense.amount).sum::<f64>())
            .sum()
    }

    /// Sum restricted to days in the reference date's calendar month and
    /// year. Callers pass "today" for the live figure, which makes the
    /// statistic time-dependent across a month boundary.
    pub fn month_total(ledger: &Ledger, reference: NaiveDate) -> f64 {
        ledger
            .days()
            .filter(|(date, _)| {
                date.year() == reference.year() && date.month() == reference.month()
            })
            .map(|(_, entries)| entries.iter().map(|expense| expense.amount).sum::<f64>())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Expense;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lifetime_total_of_empty_ledger_is_zero() {
        assert_eq!(SummaryService::lifetime_total(&Ledger::new()), 0.0);
    }

    #[test]
    fn lifetime_total_sums_every_record() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 3, 1), Expense::new("Coffee", "food", 100.0));
        ledger.add(date(2024, 3, 1), Expense::new("Lunch", "food", 250.5));
        ledger.add(date(2024, 4, 2), Expense::new("Book", "leisure", 399.0));

        assert_eq!(SummaryService::lifetime_total(&ledger), 749.5);
    }

    #[test]
    fn month_total_filters_on_year_and_month() {
        let mut ledger = Ledger::new();
        ledger.add(date(2024, 3, 1), Expense::new("March", "x", 100.0));
        ledger.add(date(2024, 4, 1), Expense::new("April", "x", 50.0));
        ledger.add(date(2023, 3, 15), Expense::new("Last year", "x", 75.0));

        let reference = date(2024, 3, 20);
        assert_eq!(SummaryService::month_total(&ledger, reference), 100.0);
    }
}
