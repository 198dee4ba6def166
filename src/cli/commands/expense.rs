use chrono::NaiveDate;

use crate::cli::forms::{parse_date, run_entry_wizard, DialoguerInteraction, SubmitOutcome};
use crate::cli::output;
use crate::cli::shell_context::{CliMode, ShellContext};

use super::{CommandDefinition, CommandError, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record an expense (wizard without arguments)",
            "add [<date> <description> <category> <amount>]",
            cmd_add,
        ),
        CommandDefinition::new(
            "edit",
            "Prefill the form from a row and remove it; resubmit to replace",
            "edit <date> <index>",
            cmd_edit,
        ),
        CommandDefinition::new(
            "delete",
            "Delete a row by day and index",
            "delete <date> <index>",
            cmd_delete,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] if context.mode == CliMode::Interactive => run_form_flow(context),
        [date, description, category, amount] => {
            context.form_mut().set(*date, *description, *category, *amount);
            finish_submission(context)
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: add [<date> <description> <category> <amount>]".into(),
        )),
    }
}

fn run_form_flow(context: &mut ShellContext) -> CommandResult {
    let mut interaction = DialoguerInteraction::new();
    let completed = run_entry_wizard(context.form_mut(), &mut interaction)?;
    if !completed {
        output::info("Entry cancelled.");
        return Ok(());
    }
    finish_submission(context)
}

fn finish_submission(context: &mut ShellContext) -> CommandResult {
    match context.submit_form()? {
        SubmitOutcome::Added => output::success("Expense recorded."),
        SubmitOutcome::Rejected => {
            // Invalid input is dropped without a message; the fields stay
            // in the form for the next attempt.
            tracing::debug!("form submission rejected");
        }
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (date, index) = parse_row_target(args, "edit")?;
    if !context.begin_edit(date, index)? {
        // Stale target: no such row, nothing to do.
        return Ok(());
    }
    if context.mode == CliMode::Interactive {
        run_form_flow(context)
    } else {
        let form = context.form();
        output::info(format!(
            "Prefilled from removed row: {} | {} | {} | {}",
            form.date, form.description, form.category, form.amount
        ));
        Ok(())
    }
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (date, index) = parse_row_target(args, "delete")?;
    if let Some(removed) = context.remove_expense(date, index)? {
        output::success(format!("Deleted `{}` from {date}.", removed.description));
    }
    Ok(())
}

fn parse_row_target(args: &[&str], usage: &str) -> Result<(NaiveDate, usize), CommandError> {
    let [raw_date, raw_index] = args else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {usage} <date> <index>"
        )));
    };
    let Some(date) = parse_date(raw_date) else {
        return Err(CommandError::InvalidArguments(format!(
            "`{raw_date}` is not a YYYY-MM-DD date"
        )));
    };
    let index = raw_index.parse::<usize>().map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw_index}` is not a row index"))
    })?;
    Ok((date, index))
}
