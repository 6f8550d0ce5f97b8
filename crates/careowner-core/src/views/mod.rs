//! Per-screen view state.
//!
//! Each screen gets a plain struct holding its tabs, search text, sort
//! settings and selection, plus the pure functions that turn store data into
//! what the screen shows. The terminal front end owns one of each.

pub mod assistant;
pub mod buyers;
pub mod deal_prep;
pub mod deal_room;
pub mod facilities;
pub mod financials;
pub mod interest;
pub mod messages;
pub mod offers;
pub mod overview;
pub mod profile;
pub mod reviews;
pub mod team;

pub use assistant::{
    canned_reply, AssistantChat, ChatMessage, ChatRole, OfferResponse, ResponseChoice, REPLY_DELAY,
};
pub use buyers::{BrowseState, BuyerCategory, BuyerListState, BuyerMarks};
pub use deal_prep::{grade_counts, high_interest, DealPrepTab};
pub use deal_room::{
    pending_document_requests, pending_questions, progress_percent, tasks_by_status,
    DealRoomState, DealRoomTab,
};
pub use facilities::{exam_room_capacity, FacilitiesState, MediaTab};
pub use financials::{bar_length, chart_max, CompareTo, FinancialsState, MetricKey, TimePeriod};
pub use interest::{active_interests, declined_interests, status_counts, InterestState};
pub use messages::{total_unread, MessagesState, ThreadTab};
pub use offers::{
    filter_offers, sort_offers, OfferListState, OfferSortField, OfferTab, OfferViewMode,
    ReorderDraft,
};
pub use overview::{
    past_meetings, upcoming_meetings, DashboardAction, DashboardPanel, DashboardState,
    MeetingsState, StatTiles,
};
pub use profile::{
    settings_rows, PracticeProfileState, ProfileTab, SettingsRow, ViewAs, Visibility,
    VisibilitySection, Widget,
};
pub use reviews::{rating_distribution, share_percent, star_string};
pub use team::{
    calculate_age, calculate_years_of_experience, MemberDraft, MemberField, TeamState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header arrow
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

/// Keep a list cursor inside a list that may have shrunk
pub fn clamp_selection(selection: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selection.min(len - 1)
    }
}

/// Move a list cursor down one row, stopping at the last row
pub fn select_next(selection: &mut usize, len: usize) {
    if *selection + 1 < len {
        *selection += 1;
    }
}

pub fn select_prev(selection: &mut usize) {
    *selection = selection.saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(5, 3), 2);
        assert_eq!(clamp_selection(1, 3), 1);
        assert_eq!(clamp_selection(4, 0), 0);
    }

    #[test]
    fn test_select_next_prev() {
        let mut selection = 0;
        select_next(&mut selection, 2);
        select_next(&mut selection, 2);
        assert_eq!(selection, 1);
        select_prev(&mut selection);
        select_prev(&mut selection);
        assert_eq!(selection, 0);
    }
}
