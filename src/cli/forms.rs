//! Expense entry form: the validation gate and the edit prefill flow.

use std::io;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::{
    core::{errors::ExpenseError, session::Session},
    domain::Expense,
};

/// Raw form fields, exactly as typed. Cleared only after a successful
/// submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

/// What became of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record appended and persisted; the form has been cleared.
    Added,
    /// Input failed the gate; the ledger is untouched and the fields are
    /// kept for correction. Deliberately not an error.
    Rejected,
}

impl ExpenseForm {
    pub fn set(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) {
        self.date = date.into();
        self.description = description.into();
        self.category = category.into();
        self.amount = amount.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// The gate: an empty or unparseable date, an empty description, or
    /// an amount that fails to parse as a finite number rejects the
    /// submission silently. The category may be blank.
    pub fn submit(&mut self, session: &mut Session) -> Result<SubmitOutcome, ExpenseError> {
        let Some(date) = parse_date(&self.date) else {
            tracing::debug!(raw = %self.date, "submission rejected: bad date");
            return Ok(SubmitOutcome::Rejected);
        };
        let description = self.description.trim();
        if description.is_empty() {
            tracing::debug!("submission rejected: empty description");
            return Ok(SubmitOutcome::Rejected);
        }
        let amount = match self.amount.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                tracing::debug!(raw = %self.amount, "submission rejected: bad amount");
                return Ok(SubmitOutcome::Rejected);
            }
        };

        let expense = Expense::new(description, self.category.trim(), amount);
        session.add_expense(date, expense)?;
        self.clear();
        Ok(SubmitOutcome::Added)
    }

    /// Copies the target record's fields into the form, then deletes the
    /// record. Resubmitting creates the replacement; abandoning the edit
    /// loses the record for good. Returns `false` for a stale target
    /// (no-op).
    pub fn begin_edit(
        &mut self,
        session: &mut Session,
        date: NaiveDate,
        index: usize,
    ) -> Result<bool, ExpenseError> {
        let Some(expense) = session.expense_at(date, index).cloned() else {
            return Ok(false);
        };
        self.date = date.format("%Y-%m-%d").to_string();
        self.description = expense.description;
        self.category = expense.category;
        self.amount = expense.amount.to_string();
        session.remove_expense(date, index)?;
        Ok(true)
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// One field prompt's result.
pub enum PromptOutcome {
    Value(String),
    Cancel,
}

/// Abstracts the prompting so wizard flows run without a terminal in
/// tests.
pub trait FormInteraction {
    fn prompt_field(
        &mut self,
        label: &str,
        initial: &str,
    ) -> Result<PromptOutcome, ExpenseError>;
}

/// `dialoguer`-backed prompting for the interactive shell.
pub struct DialoguerInteraction {
    theme: ColorfulTheme,
}

impl DialoguerInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInteraction for DialoguerInteraction {
    fn prompt_field(
        &mut self,
        label: &str,
        initial: &str,
    ) -> Result<PromptOutcome, ExpenseError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true);
        if !initial.is_empty() {
            input = input.with_initial_text(initial);
        }
        match input.interact_text() {
            Ok(value) => Ok(PromptOutcome::Value(value)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
                Ok(PromptOutcome::Cancel)
            }
            Err(dialoguer::Error::IO(err)) => Err(ExpenseError::Io(err)),
        }
    }
}

/// Walks the four fields, seeding each prompt with the form's current
/// value (prefilled when the flow came from `begin_edit`). Returns
/// `false` when the user cancels, leaving the form as it stood.
pub fn run_entry_wizard(
    form: &mut ExpenseForm,
    interaction: &mut dyn FormInteraction,
) -> Result<bool, ExpenseError> {
    for (label, field) in [
        ("Date (YYYY-MM-DD)", &mut form.date),
        ("Description", &mut form.description),
        ("Category", &mut form.category),
        ("Amount", &mut form.amount),
    ] {
        if !prompt_into(interaction, label, field)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn prompt_into(
    interaction: &mut dyn FormInteraction,
    label: &str,
    field: &mut String,
) -> Result<bool, ExpenseError> {
    let current = field.clone();
    match interaction.prompt_field(label, &current)? {
        PromptOutcome::Value(value) => {
            *field = value;
            Ok(true)
        }
        PromptOutcome::Cancel => Ok(false),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::MockInteraction;
    use super::*;

    #[test]
    fn wizard_fills_fields_in_order() {
        let mut form = ExpenseForm::default();
        let mut interaction =
            MockInteraction::answering(&["2024-03-01", "Coffee", "food", "120.5"]);

        let completed = run_entry_wizard(&mut form, &mut interaction).unwrap();
        assert!(completed);
        assert_eq!(form.date, "2024-03-01");
        assert_eq!(form.description, "Coffee");
        assert_eq!(form.category, "food");
        assert_eq!(form.amount, "120.5");
    }

    #[test]
    fn cancelled_wizard_keeps_existing_values() {
        let mut form = ExpenseForm::default();
        form.set("2024-03-01", "Coffee", "food", "120.5");
        let mut interaction = MockInteraction::cancelling_after(&["2024-04-02"]);

        let completed = run_entry_wizard(&mut form, &mut interaction).unwrap();
        assert!(!completed);
        // Only the answered field changed before the cancel.
        assert_eq!(form.date, "2024-04-02");
        assert_eq!(form.description, "Coffee");
    }

    #[test]
    fn parse_date_requires_iso_format() {
        assert!(parse_date("2024-03-01").is_some());
        assert!(parse_date(" 2024-03-01 ").is_some());
        assert!(parse_date("").is_none());
        assert!(parse_date("03/01/2024").is_none());
    }
}
