//! Budget aggregation
//!
//! Totals and derived metrics are recomputed from the current items on every
//! call. Nothing is cached.

use crate::config::ChildcareKeywords;
use crate::models::{BudgetData, BudgetItem, Category};

/// Sum of item amounts (0 for an empty list)
pub fn sum_amounts(items: &[BudgetItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

/// Sum of items whose label contains any keyword, case-insensitively
pub fn sum_matching(items: &[BudgetItem], keywords: &[String]) -> f64 {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    items
        .iter()
        .filter(|item| {
            let label = item.label.to_lowercase();
            keywords.iter().any(|k| !k.is_empty() && label.contains(k.as_str()))
        })
        .map(|item| item.amount)
        .sum()
}

/// One slice of the expense breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub label: String,
    pub amount: f64,
    /// Fraction of all positive expenses (0.0 - 1.0)
    pub share: f64,
}

/// Snapshot of all derived figures at one moment
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub net_result: f64,
    pub childcare_income: f64,
    pub childcare_expenses: f64,
    pub net_childcare_cost: f64,
}

/// Read-only aggregation over the budget
pub struct SummaryService<'a> {
    data: &'a BudgetData,
    keywords: &'a ChildcareKeywords,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(data: &'a BudgetData, keywords: &'a ChildcareKeywords) -> Self {
        Self { data, keywords }
    }

    /// Sum of one category
    pub fn total(&self, category: Category) -> f64 {
        sum_amounts(self.data.items(category))
    }

    /// Income minus expenses
    pub fn net_result(&self) -> f64 {
        self.total(Category::Income) - self.total(Category::Expense)
    }

    /// Income items that look like childcare subsidies
    pub fn childcare_income(&self) -> f64 {
        sum_matching(&self.data.income, &self.keywords.income)
    }

    /// Expense items that look like childcare costs
    pub fn childcare_expenses(&self) -> f64 {
        sum_matching(&self.data.expenses, &self.keywords.expenses)
    }

    /// What childcare costs after subsidies
    pub fn net_childcare_cost(&self) -> f64 {
        self.childcare_expenses() - self.childcare_income()
    }

    /// Positive expenses with their share of the positive total, in item order
    pub fn expense_breakdown(&self) -> Vec<BreakdownEntry> {
        let positive: Vec<&BudgetItem> = self
            .data
            .expenses
            .iter()
            .filter(|item| item.amount > 0.0)
            .collect();
        let total: f64 = positive.iter().map(|item| item.amount).sum();

        positive
            .into_iter()
            .map(|item| BreakdownEntry {
                label: item.label.clone(),
                amount: item.amount,
                share: if total > 0.0 { item.amount / total } else { 0.0 },
            })
            .collect()
    }

    /// All derived figures in one pass
    pub fn summary(&self) -> BudgetSummary {
        let childcare_income = self.childcare_income();
        let childcare_expenses = self.childcare_expenses();

        BudgetSummary {
            total_income: self.total(Category::Income),
            total_expenses: self.total(Category::Expense),
            total_savings: self.total(Category::Savings),
            net_result: self.net_result(),
            childcare_income,
            childcare_expenses,
            net_childcare_cost: childcare_expenses - childcare_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> BudgetSummary {
        let data = BudgetData::sample();
        let keywords = ChildcareKeywords::default();
        SummaryService::new(&data, &keywords).summary()
    }

    #[test]
    fn test_sample_totals() {
        let summary = sample_summary();
        assert_eq!(summary.total_income, 5650.0);
        assert_eq!(summary.total_expenses, 3510.0);
        assert_eq!(summary.total_savings, 750.0);
        assert_eq!(summary.net_result, 2140.0);
    }

    #[test]
    fn test_sample_childcare() {
        let summary = sample_summary();
        // "Kinderopvangtoeslag" and "Kindgebonden budget"
        assert_eq!(summary.childcare_income, 950.0);
        assert_eq!(summary.childcare_expenses, 1200.0);
        assert_eq!(summary.net_childcare_cost, 250.0);
    }

    #[test]
    fn test_empty_category_totals_zero() {
        let data = BudgetData::default();
        let keywords = ChildcareKeywords::default();
        let service = SummaryService::new(&data, &keywords);

        assert_eq!(service.total(Category::Savings), 0.0);
        assert_eq!(service.net_result(), 0.0);
        assert_eq!(service.net_childcare_cost(), 0.0);
        assert!(service.expense_breakdown().is_empty());
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let mut data = BudgetData::default();
        data.expenses.push(BudgetItem::new("Naschoolse BSO", 300.0));
        data.expenses.push(BudgetItem::new("KinderOPVANG", 200.0));
        data.expenses.push(BudgetItem::new("Huur", 900.0));
        let keywords = ChildcareKeywords::default();

        assert_eq!(SummaryService::new(&data, &keywords).childcare_expenses(), 500.0);
    }

    #[test]
    fn test_item_matching_both_keywords_counts_once() {
        let mut data = BudgetData::default();
        data.income.push(BudgetItem::new("Kinderopvangtoeslag", 800.0));
        let keywords = ChildcareKeywords::default();

        assert_eq!(SummaryService::new(&data, &keywords).childcare_income(), 800.0);
    }

    #[test]
    fn test_custom_keywords() {
        let mut data = BudgetData::default();
        data.expenses.push(BudgetItem::new("Daycare", 1000.0));
        let keywords = ChildcareKeywords {
            income: vec!["subsidy".into()],
            expenses: vec!["DAYCARE".into(), "after-school".into()],
        };

        assert_eq!(SummaryService::new(&data, &keywords).childcare_expenses(), 1000.0);
    }

    #[test]
    fn test_expense_breakdown_skips_non_positive() {
        let mut data = BudgetData::default();
        data.expenses.push(BudgetItem::new("Huur", 300.0));
        data.expenses.push(BudgetItem::new("Teruggave", -50.0));
        data.expenses.push(BudgetItem::new("Leeg", 0.0));
        data.expenses.push(BudgetItem::new("Eten", 100.0));
        let keywords = ChildcareKeywords::default();

        let breakdown = SummaryService::new(&data, &keywords).expense_breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].label, "Huur");
        assert_eq!(breakdown[0].share, 0.75);
        assert_eq!(breakdown[1].share, 0.25);
    }
}
