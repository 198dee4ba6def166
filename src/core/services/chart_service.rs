use crate::{currency, domain::Ledger};

/// Index-aligned labels and per-day totals, oldest day first. This is
/// the opposite ordering from the day-grouped listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

pub struct ChartService;

impl ChartService {
    pub fn series(ledger: &Ledger) -> ChartSeries {
        let mut series = ChartSeries::default();
        for (date, _) in ledger.days() {
            series.labels.push(currency::chart_label(date));
            series.values.push(ledger.day_total(date));
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Expense;
    use chrono::NaiveDate;

    #[test]
    fn series_is_ascending_with_day_totals() {
        let mut ledger = Ledger::new();
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        ledger.add(march, Expense::new("Coffee", "food", 100.0));
        ledger.add(march, Expense::new("Lunch", "food", 150.0));
        ledger.add(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Expense::new("Book", "leisure", 80.0),
        );

        let series = ChartService::series(&ledger);
        assert_eq!(series.labels, vec!["Jan 5", "Mar 1"]);
        assert_eq!(series.values, vec![80.0, 250.0]);
    }
}
