mod chart_service;
mod ledger_service;
mod summary_service;

pub use chart_service::{ChartSeries, ChartService};
pub use ledger_service::LedgerService;
pub use summary_service::SummaryService;
