use chrono::NaiveDate;
use strsim::levenshtein;

use crate::{
    core::{errors::ExpenseError, services::ChartService, session::Session},
    currency::symbol_for,
    domain::Expense,
};

use super::{
    commands::{all_definitions, CommandRegistry, CommandResult},
    forms::{ExpenseForm, SubmitOutcome},
    output,
    theme::{Theme, ThemeController, ThemeTokens},
    ui::chart::SpendChart,
    CliError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Shell runtime state: the session, the theme, the persistent chart
/// widget, and the single entry form.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub running: bool,
    pub last_command: Option<String>,
    session: Session,
    theme: ThemeController,
    chart: SpendChart,
    form: ExpenseForm,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let session = Session::open_default()?;
        Ok(Self::with_session(mode, session))
    }

    pub fn with_session(mode: CliMode, session: Session) -> Self {
        let registry = CommandRegistry::new(all_definitions());
        let theme = ThemeController::new(Theme::from_flag(session.theme_flag()));
        let symbol = symbol_for(&session.config().currency);
        let mut chart = SpendChart::new(theme.tokens(), symbol);
        chart.refresh(ChartService::series(session.ledger()), theme.tokens());
        Self {
            mode,
            registry,
            running: true,
            last_command: None,
            session,
            theme,
            chart,
            form: ExpenseForm::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn symbol(&self) -> &'static str {
        symbol_for(&self.session.config().currency)
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.theme.tokens()
    }

    pub fn chart(&self) -> &SpendChart {
        &self.chart
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.form
    }

    /// Full recompute of the derived views from the current ledger; the
    /// chart widget is mutated in place, never rebuilt.
    pub fn refresh_views(&mut self) {
        let series = ChartService::series(self.session.ledger());
        self.chart.refresh(series, self.theme.tokens());
    }

    pub fn submit_form(&mut self) -> Result<SubmitOutcome, ExpenseError> {
        let outcome = self.form.submit(&mut self.session)?;
        if outcome == SubmitOutcome::Added {
            self.refresh_views();
        }
        Ok(outcome)
    }

    pub fn begin_edit(&mut self, date: NaiveDate, index: usize) -> Result<bool, ExpenseError> {
        let found = self.form.begin_edit(&mut self.session, date, index)?;
        if found {
            self.refresh_views();
        }
        Ok(found)
    }

    pub fn remove_expense(
        &mut self,
        date: NaiveDate,
        index: usize,
    ) -> Result<Option<Expense>, ExpenseError> {
        let removed = self.session.remove_expense(date, index)?;
        if removed.is_some() {
            self.refresh_views();
        }
        Ok(removed)
    }

    /// Flips the theme, persists the flag, and re-renders the
    /// theme-dependent views.
    pub fn toggle_theme(&mut self) -> Result<Theme, ExpenseError> {
        self.theme.toggle();
        self.session.set_theme_flag(self.theme.current().flag())?;
        self.refresh_views();
        Ok(self.theme.current())
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        let handler = self
            .registry
            .get(command)
            .map(|definition| definition.handler);
        match handler {
            Some(handler) => handler(self, args),
            None => {
                self.suggest_unknown(raw);
                Ok(())
            }
        }
    }

    fn suggest_unknown(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` for the command list."
        ));
        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{best}`?"));
            }
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
