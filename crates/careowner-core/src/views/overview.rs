//! Dashboard summary and the meetings calendar.

use tracing::debug;

use super::interest::active_interests;
use super::{clamp_selection, select_next, select_prev};
use crate::models::{Activity, Meeting, MeetingStatus};
use crate::navigation::{activity_target, Page};
use crate::store::DataStore;

const DASHBOARD_MEETINGS: usize = 4;
const DASHBOARD_ACTIVITIES: usize = 8;

/// Meetings that have not happened and were not cancelled, as authored
pub fn upcoming_meetings(meetings: &[Meeting]) -> Vec<&Meeting> {
    meetings.iter().filter(|m| m.status.is_upcoming()).collect()
}

pub fn past_meetings(meetings: &[Meeting]) -> Vec<&Meeting> {
    meetings
        .iter()
        .filter(|m| m.status == MeetingStatus::Completed)
        .collect()
}

// ============================================================================
// Dashboard
// ============================================================================

/// Headline numbers across the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTiles {
    pub current_offers: usize,
    pub interested_buyers: usize,
    pub recommendations: usize,
}

impl StatTiles {
    pub fn from_store(store: &DataStore) -> Self {
        Self {
            current_offers: store.offers.len(),
            interested_buyers: active_interests(&store.interests).len(),
            recommendations: store.recommendations.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPanel {
    #[default]
    Activity,
    Meetings,
}

/// What activating a dashboard row leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    Navigate(Page),
    ViewBuyer(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub panel: DashboardPanel,
    pub selection: usize,
}

impl DashboardState {
    pub fn recent_activities(activities: &[Activity]) -> &[Activity] {
        &activities[..activities.len().min(DASHBOARD_ACTIVITIES)]
    }

    pub fn upcoming(meetings: &[Meeting]) -> Vec<&Meeting> {
        let mut upcoming = upcoming_meetings(meetings);
        upcoming.truncate(DASHBOARD_MEETINGS);
        upcoming
    }

    /// Unread items among the activities shown
    pub fn unread_count(activities: &[Activity]) -> usize {
        Self::recent_activities(activities)
            .iter()
            .filter(|a| a.is_unread)
            .count()
    }

    pub fn toggle_panel(&mut self) {
        self.panel = match self.panel {
            DashboardPanel::Activity => DashboardPanel::Meetings,
            DashboardPanel::Meetings => DashboardPanel::Activity,
        };
        self.selection = 0;
    }

    fn panel_len(&self, store: &DataStore) -> usize {
        match self.panel {
            DashboardPanel::Activity => Self::recent_activities(&store.activities).len(),
            DashboardPanel::Meetings => Self::upcoming(&store.meetings).len(),
        }
    }

    pub fn select_next(&mut self, store: &DataStore) {
        let len = self.panel_len(store);
        select_next(&mut self.selection, len);
    }

    pub fn select_prev(&mut self) {
        select_prev(&mut self.selection);
    }

    /// Activities open the page for their kind; meetings open the buyer.
    pub fn activate(&self, store: &DataStore) -> Option<DashboardAction> {
        let index = clamp_selection(self.selection, self.panel_len(store));
        let action = match self.panel {
            DashboardPanel::Activity => Self::recent_activities(&store.activities)
                .get(index)
                .map(|a| DashboardAction::Navigate(activity_target(a.kind))),
            DashboardPanel::Meetings => Self::upcoming(&store.meetings)
                .get(index)
                .map(|m| DashboardAction::ViewBuyer(m.buyer_id.clone())),
        };
        debug!(?action, "Dashboard row activated");
        action
    }
}

// ============================================================================
// Meetings page
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeetingsState {
    pub show_past: bool,
    pub selection: usize,
}

impl MeetingsState {
    pub fn visible<'a>(&self, meetings: &'a [Meeting]) -> Vec<&'a Meeting> {
        if self.show_past {
            past_meetings(meetings)
        } else {
            upcoming_meetings(meetings)
        }
    }

    pub fn toggle_past(&mut self) {
        self.show_past = !self.show_past;
        self.selection = 0;
    }

    pub fn status_count(meetings: &[Meeting], status: MeetingStatus) -> usize {
        meetings.iter().filter(|m| m.status == status).count()
    }

    pub fn site_visit_count(meetings: &[Meeting]) -> usize {
        meetings
            .iter()
            .filter(|m| m.meeting_type == "Site Visit")
            .count()
    }

    pub fn selected<'a>(&self, meetings: &'a [Meeting]) -> Option<&'a Meeting> {
        let visible = self.visible(meetings);
        visible.get(clamp_selection(self.selection, visible.len())).copied()
    }

    pub fn select_next(&mut self, len: usize) {
        select_next(&mut self.selection, len);
    }

    pub fn select_prev(&mut self) {
        select_prev(&mut self.selection);
    }
}
