//! Fixed en-IN presentation rules for money and dates.
//!
//! Aggregate figures force exactly two decimals; per-item amounts group
//! digits without forcing a decimal part. Grouping follows the Indian
//! convention: the last three digits form one group, the rest pair off.

use chrono::NaiveDate;

pub const DEFAULT_CURRENCY: &str = "INR";

pub fn symbol_for(code: &str) -> &'static str {
    match code {
        "INR" => "₹",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => "¤",
    }
}

/// Aggregate display: symbol, grouped digits, exactly two decimals.
pub fn format_total(value: f64, symbol: &str) -> String {
    let body = group_parts(&format!("{:.2}", value.abs()));
    if value < 0.0 {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

/// Per-item display: grouped digits, fraction trimmed of trailing zeros.
pub fn format_amount(value: f64) -> String {
    let mut body = format!("{:.3}", value.abs());
    while body.ends_with('0') {
        body.pop();
    }
    if body.ends_with('.') {
        body.pop();
    }
    let grouped = group_parts(&body);
    if value < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_parts(body: &str) -> String {
    match body.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{}", group_indian(int_part), fraction),
        None => group_indian(body),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Day-group header, e.g. `Friday, 01 March 2024`.
pub fn format_day_header(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// Chart axis label, e.g. `Mar 1`.
pub fn chart_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
