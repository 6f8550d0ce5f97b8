//! Offer list: scope tabs, single-column sort and the manual reorder override.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, info};

use super::{select_next, select_prev, SortDirection};
use crate::models::Offer;
use crate::utils::cmp_ignore_case;

// ============================================================================
// Tabs, view modes and sort columns
// ============================================================================

/// Which offers the list is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferTab {
    #[default]
    All,
    Active,
    Past,
}

impl OfferTab {
    pub fn title(&self) -> &'static str {
        match self {
            OfferTab::All => "All Offers",
            OfferTab::Active => "Active",
            OfferTab::Past => "Past",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            OfferTab::All => OfferTab::Active,
            OfferTab::Active => OfferTab::Past,
            OfferTab::Past => OfferTab::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            OfferTab::All => OfferTab::Past,
            OfferTab::Active => OfferTab::All,
            OfferTab::Past => OfferTab::Active,
        }
    }

    fn includes(&self, offer: &Offer) -> bool {
        match self {
            OfferTab::All => true,
            OfferTab::Active => offer.status.is_active(),
            OfferTab::Past => offer.status.is_closed(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferViewMode {
    #[default]
    Table,
    Comparison,
}

/// Sortable offer columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferSortField {
    #[default]
    ReceivedDate,
    BuyerName,
    BuyerType,
    OfferAmount,
    Day1Valuation,
    Day1Cash,
    PercentageBuying,
    EmploymentYears,
    Incentives,
    Status,
}

impl OfferSortField {
    pub const ALL: [OfferSortField; 10] = [
        OfferSortField::ReceivedDate,
        OfferSortField::BuyerName,
        OfferSortField::BuyerType,
        OfferSortField::OfferAmount,
        OfferSortField::Day1Valuation,
        OfferSortField::Day1Cash,
        OfferSortField::PercentageBuying,
        OfferSortField::EmploymentYears,
        OfferSortField::Incentives,
        OfferSortField::Status,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            OfferSortField::ReceivedDate => "Received",
            OfferSortField::BuyerName => "Buyer",
            OfferSortField::BuyerType => "Type",
            OfferSortField::OfferAmount => "Offer",
            OfferSortField::Day1Valuation => "Day-1 Value",
            OfferSortField::Day1Cash => "Day-1 Cash",
            OfferSortField::PercentageBuying => "% Buying",
            OfferSortField::EmploymentYears => "Employment",
            OfferSortField::Incentives => "Incentives",
            OfferSortField::Status => "Status",
        }
    }

    /// Compare two offers on this column, ascending
    pub fn compare(&self, a: &Offer, b: &Offer) -> Ordering {
        match self {
            OfferSortField::ReceivedDate => a.received_date.cmp(&b.received_date),
            OfferSortField::BuyerName => cmp_ignore_case(&a.buyer_name, &b.buyer_name),
            OfferSortField::BuyerType => cmp_ignore_case(a.buyer_type.label(), b.buyer_type.label()),
            OfferSortField::OfferAmount => a.offer_amount.cmp(&b.offer_amount),
            OfferSortField::Day1Valuation => a.day1_valuation.cmp(&b.day1_valuation),
            OfferSortField::Day1Cash => a.day1_cash.cmp(&b.day1_cash),
            OfferSortField::PercentageBuying => a.percentage_buying.cmp(&b.percentage_buying),
            OfferSortField::EmploymentYears => a.employment_years.cmp(&b.employment_years),
            OfferSortField::Incentives => a.incentives.len().cmp(&b.incentives.len()),
            OfferSortField::Status => a.status.key().cmp(b.status.key()),
        }
    }
}

// ============================================================================
// Filter and sort
// ============================================================================

/// Offers in scope for `tab`, preserving their relative order.
pub fn filter_offers<'a>(offers: impl IntoIterator<Item = &'a Offer>, tab: OfferTab) -> Vec<&'a Offer> {
    offers.into_iter().filter(|o| tab.includes(o)).collect()
}

/// Order offers for display.
///
/// A non-empty `custom_order` wins over the column sort: offers it names come
/// first, in the order it names them, and every other offer follows in its
/// incoming relative order. With no custom order the offers are stably
/// sorted on `field` in `direction`.
pub fn sort_offers<'a>(
    mut offers: Vec<&'a Offer>,
    field: OfferSortField,
    direction: SortDirection,
    custom_order: &[String],
) -> Vec<&'a Offer> {
    if !custom_order.is_empty() {
        let mut position: HashMap<&str, usize> = HashMap::with_capacity(custom_order.len());
        for (i, id) in custom_order.iter().enumerate() {
            position.entry(id.as_str()).or_insert(i);
        }
        offers.sort_by_key(|o| match position.get(o.id.as_str()) {
            Some(&i) => (0, i),
            None => (1, 0),
        });
        return offers;
    }

    offers.sort_by(|a, b| direction.apply(field.compare(a, b)));
    offers
}

// ============================================================================
// Reorder draft
// ============================================================================

/// Working copy of the list while the reorder dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderDraft {
    ids: Vec<String>,
    pub cursor: usize,
}

impl ReorderDraft {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, cursor: 0 }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Swap the entry at `index` with the one above it; no-op at the top.
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.ids.len() {
            self.ids.swap(index, index - 1);
        }
    }

    /// Swap the entry at `index` with the one below it; no-op at the bottom.
    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.ids.len() {
            self.ids.swap(index, index + 1);
        }
    }

    /// Move the entry under the cursor up and keep the cursor on it
    pub fn move_cursor_item_up(&mut self) {
        if self.cursor > 0 {
            self.move_up(self.cursor);
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_item_down(&mut self) {
        if self.cursor + 1 < self.ids.len() {
            self.move_down(self.cursor);
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.ids.len() {
            self.cursor += 1;
        }
    }
}

// ============================================================================
// Screen state
// ============================================================================

/// View state for the offers screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferListState {
    pub view_mode: OfferViewMode,
    pub tab: OfferTab,
    pub sort_field: OfferSortField,
    pub direction: SortDirection,
    pub custom_order: Vec<String>,
    pub selection: usize,
    pub reorder: Option<ReorderDraft>,
}

impl Default for OfferListState {
    fn default() -> Self {
        Self {
            view_mode: OfferViewMode::Table,
            tab: OfferTab::All,
            sort_field: OfferSortField::ReceivedDate,
            direction: SortDirection::Descending,
            custom_order: Vec::new(),
            selection: 0,
            reorder: None,
        }
    }
}

impl OfferListState {
    /// Offers as displayed: filtered to the tab, then ordered.
    pub fn visible<'a>(&self, offers: &'a [Offer]) -> Vec<&'a Offer> {
        sort_offers(
            filter_offers(offers, self.tab),
            self.sort_field,
            self.direction,
            &self.custom_order,
        )
    }

    /// Count for the header badge
    pub fn active_count(&self, offers: &[Offer]) -> usize {
        filter_offers(offers, OfferTab::Active).len()
    }

    pub fn selected<'a>(&self, offers: &'a [Offer]) -> Option<&'a Offer> {
        self.visible(offers).get(self.selection).copied()
    }

    /// Sort on `field`. Clears any custom order. Re-selecting the current
    /// field flips direction; a new field starts descending.
    pub fn handle_sort(&mut self, field: OfferSortField) {
        self.custom_order.clear();
        if self.sort_field == field {
            self.direction = self.direction.toggle();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Descending;
        }
        self.selection = 0;
        debug!(field = ?self.sort_field, direction = ?self.direction, "Offer sort changed");
    }

    pub fn set_tab(&mut self, tab: OfferTab) {
        self.tab = tab;
        self.selection = 0;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            OfferViewMode::Table => OfferViewMode::Comparison,
            OfferViewMode::Comparison => OfferViewMode::Table,
        };
    }

    pub fn is_custom_ordered(&self) -> bool {
        !self.custom_order.is_empty()
    }

    /// Open the reorder dialog seeded with the list as currently displayed.
    pub fn open_reorder(&mut self, offers: &[Offer]) {
        let ids = self.visible(offers).iter().map(|o| o.id.clone()).collect();
        self.reorder = Some(ReorderDraft::new(ids));
    }

    pub fn move_up(&mut self, index: usize) {
        if let Some(draft) = self.reorder.as_mut() {
            draft.move_up(index);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if let Some(draft) = self.reorder.as_mut() {
            draft.move_down(index);
        }
    }

    /// Commit the draft as the custom order and close the dialog.
    pub fn save_reorder(&mut self) {
        if let Some(draft) = self.reorder.take() {
            info!(order = ?draft.ids, "Custom offer order saved");
            self.custom_order = draft.ids;
            self.selection = 0;
        }
    }

    /// Close the dialog without touching the current order.
    pub fn cancel_reorder(&mut self) {
        self.reorder = None;
    }

    pub fn select_next(&mut self, offers: &[Offer]) {
        let len = self.visible(offers).len();
        select_next(&mut self.selection, len);
    }

    pub fn select_prev(&mut self) {
        select_prev(&mut self.selection);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuyerType, Incentive, OfferStatus};
    use crate::store::DataStore;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn offer(id: &str, name: &str, amount: u64, status: OfferStatus, day: u32) -> Offer {
        Offer {
            id: id.to_string(),
            buyer_id: id.to_string(),
            buyer_name: name.to_string(),
            buyer_type: BuyerType::PrivateEquity,
            offer_amount: amount,
            received_date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            status,
            day1_valuation: amount,
            day1_cash: amount / 2,
            percentage_buying: 100,
            employment_years: 2,
            incentives: Vec::new(),
            highlights: Vec::new(),
            concerns: Vec::new(),
        }
    }

    fn ids(offers: &[&Offer]) -> Vec<String> {
        offers.iter().map(|o| o.id.clone()).collect()
    }

    fn fixture() -> Vec<Offer> {
        let mut offers = vec![
            offer("a", "Bravo Vet", 300, OfferStatus::Pending, 10),
            offer("b", "alpha care", 500, OfferStatus::Declined, 12),
            offer("c", "Charlie Pets", 300, OfferStatus::UnderReview, 8),
            offer("d", "Delta Group", 100, OfferStatus::Accepted, 20),
            offer("e", "echo partners", 700, OfferStatus::Pending, 1),
        ];
        offers[1].incentives.push(Incentive {
            kind: "Bonus".to_string(),
            description: "Signing".to_string(),
            value: "$10,000".to_string(),
        });
        offers
    }

    fn seeded() -> Vec<Offer> {
        DataStore::embedded().unwrap().offers
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    #[test]
    fn test_filter_tabs() {
        let offers = fixture();
        assert_eq!(ids(&filter_offers(&offers, OfferTab::All)), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(ids(&filter_offers(&offers, OfferTab::Active)), vec!["a", "c", "e"]);
        assert_eq!(ids(&filter_offers(&offers, OfferTab::Past)), vec!["b", "d"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let offers = fixture();
        for tab in [OfferTab::All, OfferTab::Active, OfferTab::Past] {
            let once = filter_offers(&offers, tab);
            let twice = filter_offers(once.clone(), tab);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    #[test]
    fn test_sort_desc_is_non_increasing_permutation() {
        let offers = fixture();
        for field in OfferSortField::ALL {
            let sorted = sort_offers(offers.iter().collect(), field, SortDirection::Descending, &[]);
            assert_eq!(sorted.len(), offers.len());
            let mut got = ids(&sorted);
            got.sort();
            assert_eq!(got, vec!["a", "b", "c", "d", "e"], "field {:?}", field);
            for pair in sorted.windows(2) {
                assert_ne!(field.compare(pair[0], pair[1]), Ordering::Less, "field {:?}", field);
            }
        }
    }

    #[test]
    fn test_sort_asc_reverses_desc_ordering() {
        let offers = fixture();
        for field in OfferSortField::ALL {
            let asc = sort_offers(offers.iter().collect(), field, SortDirection::Ascending, &[]);
            for pair in asc.windows(2) {
                assert_ne!(field.compare(pair[0], pair[1]), Ordering::Greater, "field {:?}", field);
            }
        }
        let by_amount_asc =
            sort_offers(offers.iter().collect(), OfferSortField::OfferAmount, SortDirection::Ascending, &[]);
        let by_amount_desc =
            sort_offers(offers.iter().collect(), OfferSortField::OfferAmount, SortDirection::Descending, &[]);
        // a and c tie at 300 and keep their input order both ways
        assert_eq!(ids(&by_amount_asc), vec!["d", "a", "c", "b", "e"]);
        assert_eq!(ids(&by_amount_desc), vec!["e", "b", "a", "c", "d"]);
    }

    #[test]
    fn test_sort_strings_ignore_case() {
        let offers = fixture();
        let sorted = sort_offers(offers.iter().collect(), OfferSortField::BuyerName, SortDirection::Ascending, &[]);
        assert_eq!(ids(&sorted), vec!["b", "a", "c", "d", "e"]);
    }

    #[test]
    fn test_sort_by_status_key() {
        let offers = fixture();
        let sorted = sort_offers(offers.iter().collect(), OfferSortField::Status, SortDirection::Ascending, &[]);
        // accepted < declined < pending < under-review
        assert_eq!(ids(&sorted), vec!["d", "b", "a", "e", "c"]);
    }

    #[test]
    fn test_sort_by_incentive_count() {
        let offers = fixture();
        let sorted = sort_offers(offers.iter().collect(), OfferSortField::Incentives, SortDirection::Descending, &[]);
        assert_eq!(sorted[0].id, "b");
    }

    #[test]
    fn test_custom_order_subset_comes_first() {
        let offers = fixture();
        let custom = vec!["d".to_string(), "a".to_string()];
        let sorted = sort_offers(offers.iter().collect(), OfferSortField::OfferAmount, SortDirection::Descending, &custom);
        // Named offers lead in custom order, the rest keep input order
        assert_eq!(ids(&sorted), vec!["d", "a", "b", "c", "e"]);
    }

    #[test]
    fn test_custom_order_ignores_sort_field_and_unknown_ids() {
        let offers = fixture();
        let custom = vec!["zzz".to_string(), "e".to_string(), "c".to_string()];
        for field in [OfferSortField::BuyerName, OfferSortField::ReceivedDate] {
            let sorted = sort_offers(offers.iter().collect(), field, SortDirection::Ascending, &custom);
            assert_eq!(ids(&sorted), vec!["e", "c", "a", "b", "d"]);
        }
    }

    #[test]
    fn test_custom_order_duplicate_uses_first_position() {
        let offers = fixture();
        let custom = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let sorted = sort_offers(offers.iter().collect(), OfferSortField::ReceivedDate, SortDirection::Descending, &custom);
        assert_eq!(ids(&sorted)[..2], ["b".to_string(), "a".to_string()]);
    }

    // -------------------------------------------------------------------------
    // Screen state
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_state_sorts_newest_first() {
        let state = OfferListState::default();
        let offers = seeded();
        let visible = state.visible(&offers);
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4"]);
        assert_eq!(state.active_count(&offers), 3);
    }

    #[test]
    fn test_handle_sort_toggles_and_resets() {
        let mut state = OfferListState::default();
        state.handle_sort(OfferSortField::ReceivedDate);
        assert_eq!(state.direction, SortDirection::Ascending);
        state.handle_sort(OfferSortField::ReceivedDate);
        assert_eq!(state.direction, SortDirection::Descending);

        state.handle_sort(OfferSortField::OfferAmount);
        state.handle_sort(OfferSortField::OfferAmount);
        assert_eq!(state.direction, SortDirection::Ascending);
        state.handle_sort(OfferSortField::BuyerName);
        assert_eq!(state.sort_field, OfferSortField::BuyerName);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_handle_sort_clears_custom_order() {
        let offers = seeded();
        let mut state = OfferListState::default();
        state.open_reorder(&offers);
        state.move_down(0);
        state.save_reorder();
        assert!(state.is_custom_ordered());

        state.handle_sort(OfferSortField::OfferAmount);
        assert!(!state.is_custom_ordered());
        assert_eq!(ids(&state.visible(&offers)), vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn test_reorder_moves_are_bounded() {
        let mut draft = ReorderDraft::new(vec!["1".into(), "2".into(), "3".into()]);
        draft.move_up(0);
        draft.move_down(2);
        draft.move_down(7);
        assert_eq!(draft.ids(), ["1", "2", "3"]);
        draft.move_down(0);
        draft.move_up(2);
        assert_eq!(draft.ids(), ["2", "3", "1"]);
    }

    #[test]
    fn test_reorder_cursor_moves_follow_item() {
        let mut draft = ReorderDraft::new(vec!["1".into(), "2".into(), "3".into()]);
        draft.cursor_down();
        draft.move_cursor_item_down();
        assert_eq!(draft.cursor, 2);
        assert_eq!(draft.ids(), ["1", "3", "2"]);
        draft.move_cursor_item_down();
        assert_eq!(draft.cursor, 2);
        draft.move_cursor_item_up();
        draft.move_cursor_item_up();
        assert_eq!(draft.ids(), ["2", "1", "3"]);
        assert_eq!(draft.cursor, 0);
    }

    #[test]
    fn test_save_reorder_commits_displayed_order() {
        let offers = seeded();
        let mut state = OfferListState::default();
        state.open_reorder(&offers);
        state.move_up(3);
        state.save_reorder();
        assert!(state.reorder.is_none());
        assert_eq!(state.custom_order, vec!["1", "2", "4", "3"]);
        assert_eq!(ids(&state.visible(&offers)), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_cancel_reorder_leaves_order_untouched() {
        let offers = seeded();
        let mut state = OfferListState::default();
        state.handle_sort(OfferSortField::BuyerName);
        let before = state.clone();
        state.open_reorder(&offers);
        state.move_down(0);
        state.cancel_reorder();
        assert_eq!(state, before);
    }

    #[test]
    fn test_reorder_seeded_from_filtered_view() {
        let offers = seeded();
        let mut state = OfferListState::default();
        state.set_tab(OfferTab::Active);
        state.open_reorder(&offers);
        assert_eq!(state.reorder.as_ref().unwrap().ids(), ["1", "2", "3"]);
        state.move_down(0);
        state.save_reorder();

        // Offers outside the saved order trail behind it on other tabs
        state.set_tab(OfferTab::All);
        assert_eq!(ids(&state.visible(&offers)), vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn test_seeded_active_offers_by_amount() {
        let offers = seeded();
        let active = filter_offers(&offers, OfferTab::Active);
        assert_eq!(ids(&active), vec!["1", "2", "3"]);
        assert!(active
            .iter()
            .all(|o| matches!(o.status, OfferStatus::Pending | OfferStatus::UnderReview)));

        let sorted = sort_offers(active, OfferSortField::OfferAmount, SortDirection::Descending, &[]);
        assert_eq!(sorted[0].buyer_name, "Lakeside Veterinary Group");
        assert_eq!(sorted[0].offer_amount, 3_450_000);
        assert_eq!(sorted[1].buyer_name, "VetCorp Partners");
        assert_eq!(sorted[1].offer_amount, 3_200_000);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let offers = seeded();
        let mut state = OfferListState::default();
        for _ in 0..10 {
            state.select_next(&offers);
        }
        assert_eq!(state.selection, 3);
        state.set_tab(OfferTab::Past);
        assert_eq!(state.selected(&offers).unwrap().id, "4");
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selection, 0);
    }
}
