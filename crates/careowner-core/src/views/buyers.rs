//! Buyer pipeline tabs and the browse-buyers directory.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{clamp_selection, select_next, select_prev};
use crate::models::{Buyer, BuyerStatus, BuyerType};
use crate::utils::contains_ignore_case;

// ============================================================================
// Pipeline categories
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuyerCategory {
    #[default]
    All,
    SubmittedOffers,
    ActiveInterest,
    SavedContacted,
    Previous,
}

impl BuyerCategory {
    pub const ALL: [BuyerCategory; 5] = [
        BuyerCategory::All,
        BuyerCategory::SubmittedOffers,
        BuyerCategory::ActiveInterest,
        BuyerCategory::SavedContacted,
        BuyerCategory::Previous,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BuyerCategory::All => "All Buyers",
            BuyerCategory::SubmittedOffers => "Submitted Offers",
            BuyerCategory::ActiveInterest => "Active Interest",
            BuyerCategory::SavedContacted => "Saved/Contacted",
            BuyerCategory::Previous => "Previous",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Message shown when the category has no buyers
    pub fn empty_message(&self) -> &'static str {
        match self {
            BuyerCategory::All => "No buyers found.",
            BuyerCategory::SubmittedOffers => "No buyers have submitted offers yet.",
            BuyerCategory::ActiveInterest => "No buyers are showing active interest.",
            BuyerCategory::SavedContacted => "You haven't saved or contacted any buyers yet.",
            BuyerCategory::Previous => "No previous buyers.",
        }
    }
}

/// Buyers saved or contacted during this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerMarks {
    pub saved: HashSet<String>,
    pub contacted: HashSet<String>,
}

impl BuyerMarks {
    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.contains(id)
    }

    pub fn is_contacted(&self, id: &str) -> bool {
        self.contacted.contains(id)
    }

    /// Flip the saved flag. Returns the new state.
    pub fn toggle_saved(&mut self, id: &str) -> bool {
        let saved = if self.saved.remove(id) {
            false
        } else {
            self.saved.insert(id.to_string());
            true
        };
        info!(buyer_id = %id, saved, "Buyer saved flag changed");
        saved
    }

    /// Contacting is one-way: an already contacted buyer stays contacted.
    pub fn mark_contacted(&mut self, id: &str) {
        if self.contacted.insert(id.to_string()) {
            info!(buyer_id = %id, "Buyer contacted");
        }
    }

    fn includes(&self, id: &str) -> bool {
        self.is_saved(id) || self.is_contacted(id)
    }
}

fn in_category(buyer: &Buyer, category: BuyerCategory, marks: &BuyerMarks) -> bool {
    match category {
        BuyerCategory::All => true,
        BuyerCategory::SubmittedOffers => buyer.status == BuyerStatus::OfferSubmitted,
        BuyerCategory::ActiveInterest => matches!(
            buyer.status,
            BuyerStatus::InDiscussion | BuyerStatus::InitialInterest
        ),
        BuyerCategory::SavedContacted => marks.includes(&buyer.id),
        BuyerCategory::Previous => {
            matches!(buyer.status, BuyerStatus::Rejected | BuyerStatus::Archived)
        }
    }
}

fn matches_query(buyer: &Buyer, query: &str, include_description: bool) -> bool {
    contains_ignore_case(&buyer.name, query)
        || contains_ignore_case(buyer.buyer_type.label(), query)
        || contains_ignore_case(&buyer.headquarters, query)
        || (include_description && contains_ignore_case(&buyer.description, query))
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// ============================================================================
// Buyers screen
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerListState {
    pub category: BuyerCategory,
    pub search: String,
    pub selection: usize,
}

impl BuyerListState {
    /// Buyers in the current category matching the search, in authored order
    pub fn visible<'a>(&self, buyers: &'a [Buyer], marks: &BuyerMarks) -> Vec<&'a Buyer> {
        let query = normalize_query(&self.search);
        buyers
            .iter()
            .filter(|b| in_category(b, self.category, marks))
            .filter(|b| query.is_empty() || matches_query(b, &query, false))
            .collect()
    }

    /// Tab counts, unaffected by the search text
    pub fn category_counts(buyers: &[Buyer], marks: &BuyerMarks) -> Vec<(BuyerCategory, usize)> {
        BuyerCategory::ALL
            .iter()
            .map(|&c| (c, buyers.iter().filter(|b| in_category(b, c, marks)).count()))
            .collect()
    }

    pub fn set_category(&mut self, category: BuyerCategory) {
        if self.category != category {
            debug!(category = category.title(), "Buyer category changed");
            self.category = category;
            self.selection = 0;
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.selection = 0;
    }

    pub fn selected<'a>(&self, buyers: &'a [Buyer], marks: &BuyerMarks) -> Option<&'a Buyer> {
        let visible = self.visible(buyers, marks);
        visible.get(clamp_selection(self.selection, visible.len())).copied()
    }

    pub fn select_next(&mut self, len: usize) {
        select_next(&mut self.selection, len);
    }

    pub fn select_prev(&mut self) {
        select_prev(&mut self.selection);
    }
}

// ============================================================================
// Browse screen
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub type_filter: Option<BuyerType>,
    pub search: String,
    pub selection: usize,
}

impl BrowseState {
    pub fn visible<'a>(&self, buyers: &'a [Buyer]) -> Vec<&'a Buyer> {
        let query = normalize_query(&self.search);
        buyers
            .iter()
            .filter(|b| self.type_filter.map_or(true, |t| b.buyer_type == t))
            .filter(|b| query.is_empty() || matches_query(b, &query, true))
            .collect()
    }

    /// Buyer counts for each type, over the full directory
    pub fn type_counts(buyers: &[Buyer]) -> Vec<(BuyerType, usize)> {
        BuyerType::ALL
            .iter()
            .map(|&t| (t, buyers.iter().filter(|b| b.buyer_type == t).count()))
            .collect()
    }

    /// Step the type filter through "all" and each buyer type
    pub fn cycle_type_filter(&mut self) {
        self.type_filter = match self.type_filter {
            None => Some(BuyerType::ALL[0]),
            Some(current) => {
                let i = BuyerType::ALL.iter().position(|&t| t == current).unwrap_or(0);
                BuyerType::ALL.get(i + 1).copied()
            }
        };
        self.selection = 0;
        debug!(filter = ?self.type_filter, "Browse type filter changed");
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.selection = 0;
    }

    pub fn selected<'a>(&self, buyers: &'a [Buyer]) -> Option<&'a Buyer> {
        let visible = self.visible(buyers);
        visible.get(clamp_selection(self.selection, visible.len())).copied()
    }

    pub fn select_next(&mut self, len: usize) {
        select_next(&mut self.selection, len);
    }

    pub fn select_prev(&mut self) {
        select_prev(&mut self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use pretty_assertions::assert_eq;

    fn ids(buyers: &[&Buyer]) -> Vec<String> {
        buyers.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_categories_partition_by_status() {
        let store = DataStore::embedded().unwrap();
        let marks = BuyerMarks::default();
        let mut state = BuyerListState::default();

        assert_eq!(state.visible(&store.buyers, &marks).len(), 12);
        state.set_category(BuyerCategory::SubmittedOffers);
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["1", "2", "3", "4"]);
        state.set_category(BuyerCategory::ActiveInterest);
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["5", "6", "7", "8", "9"]);
        state.set_category(BuyerCategory::Previous);
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["10", "11", "12"]);
        state.set_category(BuyerCategory::SavedContacted);
        assert!(state.visible(&store.buyers, &marks).is_empty());
    }

    #[test]
    fn test_saved_contacted_category_uses_session_marks() {
        let store = DataStore::embedded().unwrap();
        let mut marks = BuyerMarks::default();
        marks.toggle_saved("7");
        marks.mark_contacted("2");
        marks.mark_contacted("7");

        let state = BuyerListState {
            category: BuyerCategory::SavedContacted,
            ..Default::default()
        };
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["2", "7"]);

        assert!(!marks.toggle_saved("7"));
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["2", "7"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let store = DataStore::embedded().unwrap();
        let marks = BuyerMarks::default();
        let mut state = BuyerListState::default();

        state.set_search("  CHICAGO ".to_string());
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["4", "8", "9", "11"]);

        state.set_search("private equity".to_string());
        assert_eq!(ids(&state.visible(&store.buyers, &marks)), vec!["3", "7"]);

        state.set_search("   ".to_string());
        assert_eq!(state.visible(&store.buyers, &marks).len(), 12);
    }

    #[test]
    fn test_category_counts_ignore_search() {
        let store = DataStore::embedded().unwrap();
        let counts = BuyerListState::category_counts(&store.buyers, &BuyerMarks::default());
        assert_eq!(
            counts,
            vec![
                (BuyerCategory::All, 12),
                (BuyerCategory::SubmittedOffers, 4),
                (BuyerCategory::ActiveInterest, 5),
                (BuyerCategory::SavedContacted, 0),
                (BuyerCategory::Previous, 3),
            ]
        );
    }

    #[test]
    fn test_category_change_resets_selection() {
        let mut state = BuyerListState {
            selection: 3,
            ..Default::default()
        };
        state.set_category(BuyerCategory::All);
        assert_eq!(state.selection, 3);
        state.set_category(BuyerCategory::Previous);
        assert_eq!(state.selection, 0);
        assert_eq!(BuyerCategory::Previous.next(), BuyerCategory::All);
        assert_eq!(BuyerCategory::All.prev(), BuyerCategory::Previous);
    }

    #[test]
    fn test_browse_type_filter_and_description_search() {
        let store = DataStore::embedded().unwrap();
        let mut state = BrowseState::default();
        assert_eq!(state.visible(&store.buyers).len(), 12);

        state.type_filter = Some(BuyerType::StrategicPartner);
        assert_eq!(ids(&state.visible(&store.buyers)), vec!["2", "6", "9", "12"]);

        state.type_filter = None;
        let needle = store.buyers[0].description.split_whitespace().last().unwrap();
        state.set_search(needle.to_uppercase());
        assert!(ids(&state.visible(&store.buyers)).contains(&"1".to_string()));
    }

    #[test]
    fn test_browse_type_filter_cycles_back_to_all() {
        let mut state = BrowseState::default();
        for _ in 0..BuyerType::ALL.len() {
            state.cycle_type_filter();
            assert!(state.type_filter.is_some());
        }
        state.cycle_type_filter();
        assert_eq!(state.type_filter, None);
    }

    #[test]
    fn test_type_counts() {
        let store = DataStore::embedded().unwrap();
        let counts = BrowseState::type_counts(&store.buyers);
        let count = |t| counts.iter().find(|(k, _)| *k == t).map(|(_, n)| *n);
        assert_eq!(count(BuyerType::CorporateGroup), Some(3));
        assert_eq!(count(BuyerType::PrivateEquity), Some(2));
        assert_eq!(count(BuyerType::IndividualBuyer), Some(3));
        assert_eq!(count(BuyerType::StrategicPartner), Some(4));
        assert_eq!(count(BuyerType::ParentCompany), Some(0));
    }

    #[test]
    fn test_contacted_is_one_way() {
        let mut marks = BuyerMarks::default();
        marks.mark_contacted("3");
        marks.mark_contacted("3");
        assert!(marks.is_contacted("3"));
        assert_eq!(marks.contacted.len(), 1);
    }
}
