//! Budget categories
//!
//! The budget is partitioned into exactly three categories. Each one owns its
//! own ordered list of line items inside [`BudgetData`](super::BudgetData).

use std::fmt;
use std::str::FromStr;

/// One of the three item partitions of the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Monthly income (salaries, allowances, subsidies)
    Income,
    /// Monthly expenses
    Expense,
    /// Money reserved for later (holiday pay, child benefit)
    Savings,
}

impl Category {
    /// All categories in canonical order (income, expenses, savings)
    pub const ALL: [Category; 3] = [Category::Income, Category::Expense, Category::Savings];

    /// Tag written in the type column of a CSV export
    pub fn csv_tag(&self) -> &'static str {
        match self {
            Self::Income => "Inkomsten",
            Self::Expense => "Uitgaven",
            Self::Savings => "Sparen",
        }
    }

    /// Heading used when listing the category
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => "Maandelijkse Inkomsten",
            Self::Expense => "Maandelijkse Uitgaven",
            Self::Savings => "Reserveringen (Sparen)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expenses"),
            Self::Savings => write!(f, "savings"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "inkomsten" | "in" => Ok(Self::Income),
            "expense" | "expenses" | "uitgaven" | "out" => Ok(Self::Expense),
            "savings" | "saving" | "sparen" => Ok(Self::Savings),
            other => Err(format!(
                "unknown category '{}' (expected income, expenses or savings)",
                other
            )),
        }
    }
}
