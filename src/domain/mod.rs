pub mod expense;
pub mod ledger;

pub use expense::Expense;
pub use ledger::Ledger;
