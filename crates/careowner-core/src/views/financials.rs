//! Financials page state: reporting period, comparison target and the
//! change figures shown next to each metric.

use tracing::debug;

use crate::models::{Financials, FinancialMetric, MonthlyFigure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    Last30Days,
    Last6Months,
    #[default]
    Last12Months,
    YearToDate,
    TrailingTwelveMonths,
    Custom,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 6] = [
        TimePeriod::Last30Days,
        TimePeriod::Last6Months,
        TimePeriod::Last12Months,
        TimePeriod::YearToDate,
        TimePeriod::TrailingTwelveMonths,
        TimePeriod::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Last30Days => "Last 30 Days",
            TimePeriod::Last6Months => "Last 6 Months",
            TimePeriod::Last12Months => "Last 12 Months",
            TimePeriod::YearToDate => "Year to Date",
            TimePeriod::TrailingTwelveMonths => "Trailing 12 Months (TTM)",
            TimePeriod::Custom => "Custom Period",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareTo {
    #[default]
    PreviousPeriod,
    MarketBenchmarks,
}

impl CompareTo {
    pub fn label(&self) -> &'static str {
        match self {
            CompareTo::PreviousPeriod => "Previous Period",
            CompareTo::MarketBenchmarks => "Market Benchmarks",
        }
    }
}

/// The six headline figures on the financials page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKey {
    Revenue,
    Ebitda,
    EbitdaMargin,
    RevenueMultiple,
    TotalTransactions,
    AverageTransaction,
}

impl MetricKey {
    pub const ALL: [MetricKey; 6] = [
        MetricKey::Revenue,
        MetricKey::Ebitda,
        MetricKey::EbitdaMargin,
        MetricKey::RevenueMultiple,
        MetricKey::TotalTransactions,
        MetricKey::AverageTransaction,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MetricKey::Revenue => "Annual Revenue",
            MetricKey::Ebitda => "EBITDA",
            MetricKey::EbitdaMargin => "EBITDA Margin",
            MetricKey::RevenueMultiple => "Revenue Multiple",
            MetricKey::TotalTransactions => "Total Transactions",
            MetricKey::AverageTransaction => "Average Transaction Size",
        }
    }

    pub fn metric<'a>(&self, financials: &'a Financials) -> &'a FinancialMetric {
        match self {
            MetricKey::Revenue => &financials.annual_revenue,
            MetricKey::Ebitda => &financials.ebitda,
            MetricKey::EbitdaMargin => &financials.ebitda_margin,
            MetricKey::RevenueMultiple => &financials.revenue_multiple,
            MetricKey::TotalTransactions => &financials.total_transactions,
            MetricKey::AverageTransaction => &financials.average_transaction,
        }
    }

    /// Percent change against the comparison target
    pub fn change(&self, against: CompareTo) -> f64 {
        match (against, self) {
            (CompareTo::PreviousPeriod, MetricKey::Revenue) => 12.5,
            (CompareTo::PreviousPeriod, MetricKey::Ebitda) => 15.3,
            (CompareTo::PreviousPeriod, MetricKey::EbitdaMargin) => 2.1,
            (CompareTo::PreviousPeriod, MetricKey::RevenueMultiple) => 0.8,
            (CompareTo::PreviousPeriod, MetricKey::TotalTransactions) => 8.2,
            (CompareTo::PreviousPeriod, MetricKey::AverageTransaction) => 3.9,
            (CompareTo::MarketBenchmarks, MetricKey::Revenue) => 5.7,
            (CompareTo::MarketBenchmarks, MetricKey::Ebitda) => 3.2,
            (CompareTo::MarketBenchmarks, MetricKey::EbitdaMargin) => -1.5,
            (CompareTo::MarketBenchmarks, MetricKey::RevenueMultiple) => -2.3,
            (CompareTo::MarketBenchmarks, MetricKey::TotalTransactions) => 4.1,
            (CompareTo::MarketBenchmarks, MetricKey::AverageTransaction) => 1.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialsState {
    pub period: TimePeriod,
    pub compare_enabled: bool,
    pub compare_to: CompareTo,
}

impl Default for FinancialsState {
    fn default() -> Self {
        Self {
            period: TimePeriod::default(),
            compare_enabled: true,
            compare_to: CompareTo::default(),
        }
    }
}

impl FinancialsState {
    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
        debug!(period = self.period.label(), "Financials period changed");
    }

    pub fn toggle_compare(&mut self) {
        self.compare_enabled = !self.compare_enabled;
    }

    /// Switch the comparison target. Ignored while comparison is off.
    pub fn toggle_compare_target(&mut self) {
        if !self.compare_enabled {
            return;
        }
        self.compare_to = match self.compare_to {
            CompareTo::PreviousPeriod => CompareTo::MarketBenchmarks,
            CompareTo::MarketBenchmarks => CompareTo::PreviousPeriod,
        };
    }

    /// Change shown beside a metric, `None` while comparison is off
    pub fn comparison(&self, metric: MetricKey) -> Option<f64> {
        self.compare_enabled.then(|| metric.change(self.compare_to))
    }
}

/// Largest revenue or expense figure in the chart, for scaling bars
pub fn chart_max(months: &[MonthlyFigure]) -> u64 {
    months
        .iter()
        .map(|m| m.revenue.max(m.expenses))
        .max()
        .unwrap_or(0)
}

/// Bar length for `value` on a scale where `max` fills `width` cells
pub fn bar_length(value: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn month(revenue: u64, expenses: u64) -> MonthlyFigure {
        MonthlyFigure {
            month: "Oct".to_string(),
            revenue,
            expenses,
            projected: false,
        }
    }

    #[test]
    fn test_period_cycles_through_every_option() {
        let mut state = FinancialsState::default();
        assert_eq!(state.period, TimePeriod::Last12Months);
        for _ in 0..TimePeriod::ALL.len() {
            state.cycle_period();
        }
        assert_eq!(state.period, TimePeriod::Last12Months);
        state.cycle_period();
        assert_eq!(state.period, TimePeriod::YearToDate);
    }

    #[test]
    fn test_market_benchmarks_show_mixed_changes() {
        let mut state = FinancialsState::default();
        assert_eq!(state.comparison(MetricKey::EbitdaMargin), Some(2.1));

        state.toggle_compare_target();
        assert_eq!(state.compare_to, CompareTo::MarketBenchmarks);
        assert_eq!(state.comparison(MetricKey::EbitdaMargin), Some(-1.5));
        assert_eq!(state.comparison(MetricKey::Revenue), Some(5.7));
    }

    #[test]
    fn test_disabled_comparison_hides_changes_and_locks_target() {
        let mut state = FinancialsState::default();
        state.toggle_compare();
        assert_eq!(state.comparison(MetricKey::Revenue), None);

        state.toggle_compare_target();
        assert_eq!(state.compare_to, CompareTo::PreviousPeriod);
    }

    #[test]
    fn test_bar_scaling() {
        let months = vec![month(200_000, 150_000), month(180_000, 240_000)];
        assert_eq!(chart_max(&months), 240_000);
        assert_eq!(bar_length(120_000, 240_000, 30), 15);
        assert_eq!(bar_length(240_000, 240_000, 30), 30);
        assert_eq!(bar_length(5, 0, 30), 0);
        assert_eq!(chart_max(&[]), 0);
    }
}
