use serde::{Deserialize, Serialize};

/// A single expense entry.
///
/// Records carry no identity of their own; an expense is addressed by its
/// date and its index within that day's list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            amount,
        }
    }
}
