//! Yearly projection
//!
//! Linear extrapolation of the current monthly totals: no interest, no
//! compounding, no randomness.

/// One projected month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    /// 1-based month index
    pub period: u32,
    pub cumulative_net: f64,
    pub cumulative_savings: f64,
    pub steady_income: f64,
    pub steady_expenses: f64,
}

impl ProjectionPoint {
    /// Display label, e.g. "Maand 3"
    pub fn label(&self) -> String {
        format!("Maand {}", self.period)
    }
}

/// Finite, restartable sequence of projected months
#[derive(Debug, Clone)]
pub struct Projection {
    income: f64,
    expenses: f64,
    savings: f64,
    next: u64,
    periods: u32,
}

impl Projection {
    /// Point for a given month index (not bounded by the horizon)
    pub fn point(&self, period: u32) -> ProjectionPoint {
        let m = f64::from(period);
        ProjectionPoint {
            period,
            cumulative_net: (self.income - self.expenses) * m,
            cumulative_savings: self.savings * m,
            steady_income: self.income,
            steady_expenses: self.expenses,
        }
    }
}

impl Iterator for Projection {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let period = u32::try_from(self.next)
            .ok()
            .filter(|p| *p <= self.periods)?;
        self.next += 1;
        Some(self.point(period))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.periods) + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Projection {}

/// Project `periods` months ahead from steady monthly totals
pub fn project(total_income: f64, total_expenses: f64, total_savings: f64, periods: u32) -> Projection {
    Projection {
        income: total_income,
        expenses: total_expenses,
        savings: total_savings,
        next: 1,
        periods,
    }
}
