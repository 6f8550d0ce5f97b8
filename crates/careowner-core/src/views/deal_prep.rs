use crate::models::{DealPreparation, Grade, InterestLevel, MarketCheckResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealPrepTab {
    #[default]
    Selling,
    BuyerPreferences,
    MarketCheck,
}

impl DealPrepTab {
    pub const ALL: [DealPrepTab; 3] = [
        DealPrepTab::Selling,
        DealPrepTab::BuyerPreferences,
        DealPrepTab::MarketCheck,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DealPrepTab::Selling => "Selling",
            DealPrepTab::BuyerPreferences => "Buyer Preferences",
            DealPrepTab::MarketCheck => "Market Check",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Number of readiness areas at each grade, best grade first
pub fn grade_counts(prep: &DealPreparation) -> Vec<(Grade, usize)> {
    let mut counts: Vec<(Grade, usize)> = Vec::new();
    for metric in &prep.readiness {
        match counts.iter_mut().find(|(g, _)| *g == metric.grade) {
            Some((_, n)) => *n += 1,
            None => counts.push((metric.grade, 1)),
        }
    }
    counts.sort_by_key(|(g, _)| *g);
    counts
}

/// Market check responses from buyers reporting high interest
pub fn high_interest(prep: &DealPreparation) -> Vec<&MarketCheckResponse> {
    prep.market_check
        .iter()
        .filter(|r| r.interest == InterestLevel::High)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tabs_wrap() {
        assert_eq!(DealPrepTab::MarketCheck.next(), DealPrepTab::Selling);
        assert_eq!(DealPrepTab::Selling.prev(), DealPrepTab::MarketCheck);
    }

    #[test]
    fn test_seed_grade_counts() {
        let store = DataStore::embedded().unwrap();
        assert_eq!(
            grade_counts(&store.deal_preparation),
            vec![(Grade::A, 4), (Grade::B, 2)]
        );
    }

    #[test]
    fn test_seed_high_interest_buyers() {
        let store = DataStore::embedded().unwrap();
        let names: Vec<&str> = high_interest(&store.deal_preparation)
            .iter()
            .map(|r| r.buyer_type.as_str())
            .collect();
        assert_eq!(names, vec!["Corporate Acquirer", "Private Equity Group"]);
    }
}
