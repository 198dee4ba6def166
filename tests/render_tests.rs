use chrono::NaiveDate;
use expense_core::{
    cli::{theme::Theme, ui::list_view},
    core::services::ChartService,
    domain::{Expense, Ledger},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn three_day_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add(date(2024, 1, 5), Expense::new("Book", "leisure", 80.0));
    ledger.add(date(2024, 3, 1), Expense::new("Coffee", "food", 120.5));
    ledger.add(date(2024, 2, 10), Expense::new("Groceries", "food", 1240.0));
    ledger
}

#[test]
fn listing_orders_days_newest_first() {
    colored::control::set_override(false);
    let rendered = list_view::render(&three_day_ledger(), &Theme::Light.tokens(), "₹");

    let march = rendered.find("2024-03-01").expect("march group");
    let february = rendered.find("2024-02-10").expect("february group");
    let january = rendered.find("2024-01-05").expect("january group");
    assert!(march < february && february < january);
}

#[test]
fn listing_headers_use_weekday_and_full_date() {
    colored::control::set_override(false);
    let rendered = list_view::render(&three_day_ledger(), &Theme::Light.tokens(), "₹");
    assert!(rendered.contains("Friday, 01 March 2024"));
    assert!(rendered.contains("Saturday, 10 February 2024"));
}

#[test]
fn listing_rows_keep_insertion_order_and_show_addresses() {
    colored::control::set_override(false);
    let mut ledger = Ledger::new();
    let day = date(2024, 3, 1);
    ledger.add(day, Expense::new("Coffee", "food", 120.0));
    ledger.add(day, Expense::new("Bus", "travel", 45.0));

    let rendered = list_view::render(&ledger, &Theme::Light.tokens(), "₹");
    let coffee = rendered.find("[0] Coffee").expect("first row");
    let bus = rendered.find("[1] Bus").expect("second row");
    assert!(coffee < bus);
}

#[test]
fn rerendering_an_unchanged_ledger_is_identical() {
    colored::control::set_override(false);
    let ledger = three_day_ledger();
    let first = list_view::render(&ledger, &Theme::Dark.tokens(), "₹");
    let second = list_view::render(&ledger, &Theme::Dark.tokens(), "₹");
    assert_eq!(first, second);
}

#[test]
fn chart_series_runs_oldest_first_opposite_the_listing() {
    let series = ChartService::series(&three_day_ledger());
    assert_eq!(series.labels, vec!["Jan 5", "Feb 10", "Mar 1"]);
    assert_eq!(series.values, vec![80.0, 1240.0, 120.5]);
}

#[test]
fn empty_ledger_renders_a_placeholder() {
    colored::control::set_override(false);
    let rendered = list_view::render(&Ledger::new(), &Theme::Light.tokens(), "₹");
    assert_eq!(rendered, "No expenses recorded yet.");
}
