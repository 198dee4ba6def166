//! Day-grouped expense listing, newest day first.

use colored::Colorize;

use crate::{cli::theme::ThemeTokens, currency, domain::Ledger};

const DESCRIPTION_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 12;

/// Renders one group per day, ordered by parsed calendar date descending.
/// Rows keep their stored insertion order and show the `(date, index)`
/// address the edit/delete commands expect.
pub fn render(ledger: &Ledger, tokens: &ThemeTokens, symbol: &str) -> String {
    if ledger.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let mut out = String::new();
    for (date, entries) in ledger.days_newest_first() {
        let header = format!(
            "{}  ({})",
            currency::format_day_header(date),
            date.format("%Y-%m-%d")
        );
        out.push_str(&format!("{}\n", header.color(tokens.text).bold()));

        for (index, expense) in entries.iter().enumerate() {
            // Pad before coloring: escape codes would skew the columns.
            let description = format!(
                "{:<width$}",
                truncate(&expense.description, DESCRIPTION_WIDTH),
                width = DESCRIPTION_WIDTH
            );
            let category = format!(
                "{:<width$}",
                truncate(&expense.category, CATEGORY_WIDTH),
                width = CATEGORY_WIDTH
            );
            let amount = format!(
                "{:>10}",
                format!("{symbol}{}", currency::format_amount(expense.amount))
            );
            out.push_str(&format!(
                "  [{index}] {} {} {}\n",
                description.color(tokens.text),
                category.color(tokens.tooltip_body),
                amount.color(tokens.text),
            ));
        }
        out.push('\n');
    }

    out.push_str(
        &"Rows are addressed by day and index: `edit <date> <index>`, `delete <date> <index>`."
            .color(tokens.grid)
            .to_string(),
    );
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
