//! In-terminal line chart of daily spending.
//!
//! One widget instance lives for the whole session. Refreshes overwrite
//! its labels, values, and palette in place; `redraw` re-renders from
//! whatever the widget currently holds.

use colored::{Color, Colorize};

use crate::{cli::theme::ThemeTokens, core::services::ChartSeries, currency};

const PLOT_HEIGHT: usize = 10;
const GUTTER_WIDTH: usize = 10;
const MIN_COLUMN_WIDTH: usize = 6;
const FALLBACK_TERM_WIDTH: usize = 80;

// The trend line keeps one accent color in both themes.
const ACCENT: Color = Color::BrightBlue;

pub struct SpendChart {
    labels: Vec<String>,
    values: Vec<f64>,
    tokens: ThemeTokens,
    symbol: String,
}

impl SpendChart {
    pub fn new(tokens: ThemeTokens, symbol: impl Into<String>) -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
            tokens,
            symbol: symbol.into(),
        }
    }

    /// Overwrites the dataset and palette; the widget itself is never
    /// recreated.
    pub fn refresh(&mut self, series: ChartSeries, tokens: ThemeTokens) {
        self.labels = series.labels;
        self.values = series.values;
        self.tokens = tokens;
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn redraw(&self) -> String {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(FALLBACK_TERM_WIDTH);
        self.redraw_width(width)
    }

    /// Renders at an explicit width. When more days exist than fit, the
    /// oldest columns are dropped and the cut is reported.
    pub fn redraw_width(&self, width: usize) -> String {
        if self.values.is_empty() {
            return "No spending to chart yet.".to_string();
        }

        let column_width = self
            .labels
            .iter()
            .map(|label| label.chars().count() + 2)
            .max()
            .unwrap_or(MIN_COLUMN_WIDTH)
            .max(MIN_COLUMN_WIDTH);
        let plot_width = width.saturating_sub(GUTTER_WIDTH + 1).max(column_width);
        let visible = (plot_width / column_width).max(1).min(self.values.len());
        let skipped = self.values.len() - visible;
        let labels = &self.labels[skipped..];
        let values = &self.values[skipped..];

        let max = values.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
        let marker_rows: Vec<usize> = values
            .iter()
            .map(|value| {
                if *value <= 0.0 {
                    0
                } else {
                    ((value / max) * PLOT_HEIGHT as f64).ceil() as usize
                }
            })
            .collect();

        let mut out = String::new();
        out.push_str(&format!("{}\n", "Daily Spending".color(ACCENT).bold()));

        for row in (1..=PLOT_HEIGHT).rev() {
            let labelled = row == PLOT_HEIGHT || row == PLOT_HEIGHT / 2 || row == 1;
            let gutter = if labelled {
                let threshold = max * row as f64 / PLOT_HEIGHT as f64;
                let tick = format!(
                    "{}{}",
                    self.symbol,
                    currency::format_amount(threshold.round())
                );
                format!("{tick:>width$}", width = GUTTER_WIDTH)
            } else {
                " ".repeat(GUTTER_WIDTH)
            };
            out.push_str(&gutter.color(self.tokens.text).to_string());
            out.push_str(&"│".color(self.tokens.grid).to_string());

            for marker_row in &marker_rows {
                let cell = if *marker_row == row {
                    pad_center("●", column_width)
                        .color(ACCENT)
                        .to_string()
                } else if labelled {
                    pad_center("·", column_width)
                        .color(self.tokens.grid)
                        .to_string()
                } else {
                    " ".repeat(column_width)
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }

        out.push_str(&" ".repeat(GUTTER_WIDTH));
        out.push_str(
            &format!("└{}", "─".repeat(column_width * labels.len()))
                .color(self.tokens.grid)
                .to_string(),
        );
        out.push('\n');

        out.push_str(&" ".repeat(GUTTER_WIDTH + 1));
        for label in labels {
            out.push_str(
                &pad_center(label, column_width)
                    .color(self.tokens.text)
                    .to_string(),
            );
        }
        out.push('\n');

        if skipped > 0 {
            out.push_str(
                &format!(
                    "(showing the last {visible} of {} days)\n",
                    self.values.len()
                )
                .color(self.tokens.grid)
                .to_string(),
            );
        }

        out.push_str(&self.summary_box(labels, values));
        out
    }

    // Tooltip-styled recap under the plot; exercises the tooltip tokens
    // the same way the hover card does on a pointer surface.
    fn summary_box(&self, labels: &[String], values: &[f64]) -> String {
        let mut out = String::new();
        let peak = values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal));
        let Some((peak_index, peak_value)) = peak else {
            return out;
        };
        let latest_index = values.len() - 1;

        out.push_str(&format!(
            "{}\n",
            " Daily Spending "
                .color(self.tokens.tooltip_title)
                .on_color(self.tokens.tooltip_bg)
                .bold()
        ));
        out.push_str(&format!(
            "{}\n",
            format!(
                " Peak   {} · {}{} ",
                labels[peak_index],
                self.symbol,
                currency::format_amount(*peak_value)
            )
            .color(self.tokens.tooltip_body)
            .on_color(self.tokens.tooltip_bg)
        ));
        out.push_str(&format!(
            "{}\n",
            format!(
                " Latest {} · {}{} ",
                labels[latest_index],
                self.symbol,
                currency::format_amount(values[latest_index])
            )
            .color(self.tokens.tooltip_body)
            .on_color(self.tokens.tooltip_bg)
        ));
        out
    }
}

fn pad_center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
