//! CSV Import service
//!
//! Reads a budget CSV (`Type,Omschrijving,Bedrag`) back into the three item
//! lists. Rows that can't be understood are skipped; an import that yields
//! no items at all is rejected and leaves the budget untouched.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_leading_float, BudgetData, BudgetItem, Category};

use super::items::ItemService;

/// Items parsed from a CSV, not yet applied
#[derive(Debug, Clone, Default)]
pub struct ParsedImport {
    pub income: Vec<BudgetItem>,
    pub expenses: Vec<BudgetItem>,
    pub savings: Vec<BudgetItem>,
    /// Data rows that were dropped
    pub skipped: usize,
}

/// Counts reported after an import was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub income: usize,
    pub expenses: usize,
    pub savings: usize,
    pub skipped: usize,
}

impl ImportSummary {
    /// Total number of imported items
    pub fn total(&self) -> usize {
        self.income + self.expenses + self.savings
    }
}

impl ParsedImport {
    /// True when no row produced an item
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty() && self.savings.is_empty()
    }

    /// Counts as they would be reported
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            income: self.income.len(),
            expenses: self.expenses.len(),
            savings: self.savings.len(),
            skipped: self.skipped,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<BudgetItem> {
        match category {
            Category::Income => &mut self.income,
            Category::Expense => &mut self.expenses,
            Category::Savings => &mut self.savings,
        }
    }

    /// Replace the three item lists of `data`; history is left alone
    pub fn apply(self, data: &mut BudgetData) -> ImportSummary {
        let mut service = ItemService::new(data);
        ImportSummary {
            income: service.replace_category(Category::Income, self.income),
            expenses: service.replace_category(Category::Expense, self.expenses),
            savings: service.replace_category(Category::Savings, self.savings),
            skipped: self.skipped,
        }
    }
}

/// Map the type column to a category by keyword
pub fn classify_type(type_field: &str) -> Option<Category> {
    let t = type_field.to_lowercase();
    if t.contains("inkomsten") {
        Some(Category::Income)
    } else if t.contains("uitgaven") {
        Some(Category::Expense)
    } else if t.contains("sparen") || t.contains("saving") {
        Some(Category::Savings)
    } else {
        None
    }
}

/// Parse an amount cell, tolerating currency symbols and a decimal comma
///
/// Only the first comma becomes a decimal point, so "1,200.50" reads as 1.2.
pub fn parse_amount_field(field: &str) -> Option<f64> {
    let cleaned: String = field
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    parse_leading_float(&cleaned.replacen(',', ".", 1))
}

/// Split one line into trimmed, unquoted fields
fn split_line(line: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next()? {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("unreadable CSV line skipped: {}", e);
            None
        }
    }
}

/// Which cells of a raw line open with a quote
///
/// The csv reader only treats a cell as quoted when the quote is its very
/// first character; those cells are already unescaped.
fn quoted_cells(line: &str) -> Vec<bool> {
    let mut flags = Vec::new();
    let mut at_start = true;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if at_start {
            at_start = false;
            flags.push(c == '"');
            if c == '"' {
                in_quotes = true;
                continue;
            }
        }
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
        } else if c == ',' {
            at_start = true;
        }
    }
    if at_start {
        flags.push(false);
    }

    flags
}

/// Strip one pair of surrounding quotes left in an unquoted cell such as ` "Huur"`
fn unwrap_quotes(field: &str) -> String {
    let field = field.trim();
    match field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}

/// Parse CSV text into categorized items
///
/// # Errors
///
/// Returns [`BudgetError::Import`] when no valid row was found.
pub fn parse_budget_csv(content: &str) -> BudgetResult<ParsedImport> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let has_header = lines
        .first()
        .and_then(|line| split_line(line))
        .and_then(|record| record.get(0).map(|f| f.to_lowercase().contains("type")))
        .unwrap_or(false);

    let mut parsed = ParsedImport::default();

    for line in lines.iter().skip(usize::from(has_header)) {
        let fields: Vec<String> = match split_line(line) {
            Some(record) => {
                let quoted = quoted_cells(line);
                record
                    .iter()
                    .enumerate()
                    .map(|(idx, field)| match quoted.get(idx) {
                        Some(true) => field.to_string(),
                        _ => unwrap_quotes(field),
                    })
                    .collect()
            }
            None => {
                parsed.skipped += 1;
                continue;
            }
        };

        if fields.len() < 3 {
            parsed.skipped += 1;
            continue;
        }

        let (type_field, label, amount_field) = (&fields[0], &fields[1], &fields[2]);

        let Some(amount) = parse_amount_field(amount_field) else {
            parsed.skipped += 1;
            continue;
        };

        match classify_type(type_field) {
            Some(category) if !label.is_empty() => {
                parsed
                    .list_mut(category)
                    .push(BudgetItem::new(label.as_str(), amount));
            }
            _ => parsed.skipped += 1,
        }
    }

    if parsed.is_empty() {
        return Err(BudgetError::Import("No valid data found in file".into()));
    }

    log::debug!(
        "parsed CSV: {} income, {} expenses, {} savings, {} skipped",
        parsed.income.len(),
        parsed.expenses.len(),
        parsed.savings.len(),
        parsed.skipped
    );

    Ok(parsed)
}
