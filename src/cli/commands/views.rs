use chrono::Local;

use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::list_view;
use crate::core::services::SummaryService;
use crate::currency;

use super::{CommandDefinition, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "list",
            "Show expenses grouped by day, newest first",
            "list",
            cmd_list,
        ),
        CommandDefinition::new(
            "summary",
            "Show lifetime and current-month totals",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new("chart", "Draw the daily spending trend", "chart", cmd_chart),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Expenses");
    println!(
        "{}",
        list_view::render(
            context.session().ledger(),
            &context.tokens(),
            context.symbol()
        )
    );
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.session().ledger();
    let lifetime = SummaryService::lifetime_total(ledger);
    let month = SummaryService::month_total(ledger, Local::now().date_naive());
    let symbol = context.symbol();
    output::section("Summary");
    output::info(format!(
        "Total spent   {}",
        currency::format_total(lifetime, symbol)
    ));
    output::info(format!(
        "This month    {}",
        currency::format_total(month, symbol)
    ));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Trend");
    println!("{}", context.chart().redraw());
    Ok(())
}
