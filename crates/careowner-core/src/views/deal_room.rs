//! Deal room: closing progress, the task board and outstanding requests.

use tracing::debug;

use crate::models::{
    DealRoom, DealTask, DocumentRequest, QaItem, QaStatus, RequestStatus, StepStatus, TaskStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealRoomTab {
    #[default]
    Overview,
    Tasks,
    Documents,
    Qa,
    DealDetails,
}

impl DealRoomTab {
    pub const ALL: [DealRoomTab; 5] = [
        DealRoomTab::Overview,
        DealRoomTab::Tasks,
        DealRoomTab::Documents,
        DealRoomTab::Qa,
        DealRoomTab::DealDetails,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DealRoomTab::Overview => "Overview",
            DealRoomTab::Tasks => "Tasks",
            DealRoomTab::Documents => "Documents",
            DealRoomTab::Qa => "Q&A",
            DealRoomTab::DealDetails => "Deal Details",
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

/// Share of timeline steps complete, 0 to 100. An empty timeline is 0.
pub fn progress_percent(room: &DealRoom) -> f64 {
    if room.timeline.is_empty() {
        return 0.0;
    }
    let complete = room
        .timeline
        .iter()
        .filter(|s| s.status == StepStatus::Complete)
        .count();
    complete as f64 / room.timeline.len() as f64 * 100.0
}

pub fn tasks_by_status(room: &DealRoom, status: TaskStatus) -> Vec<&DealTask> {
    room.tasks.iter().filter(|t| t.status == status).collect()
}

pub fn pending_document_requests(room: &DealRoom) -> Vec<&DocumentRequest> {
    room.requested_documents
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .collect()
}

pub fn pending_questions(room: &DealRoom) -> Vec<&QaItem> {
    room.qa.iter().filter(|q| q.status == QaStatus::Pending).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealRoomState {
    pub tab: DealRoomTab,
    pub scroll: u16,
}

impl DealRoomState {
    pub fn set_tab(&mut self, tab: DealRoomTab) {
        if self.tab != tab {
            debug!(tab = tab.title(), "Deal room tab changed");
            self.tab = tab;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;

    #[test]
    fn test_progress_counts_complete_steps() {
        let store = DataStore::embedded().unwrap();
        assert!((progress_percent(&store.deal_room) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_empty_timeline_is_zero() {
        let mut room = DataStore::embedded().unwrap().deal_room;
        room.timeline.clear();
        assert_eq!(progress_percent(&room), 0.0);
    }

    #[test]
    fn test_task_board_columns() {
        let store = DataStore::embedded().unwrap();
        let room = &store.deal_room;
        let counts: Vec<usize> = TaskStatus::ALL
            .iter()
            .map(|&s| tasks_by_status(room, s).len())
            .collect();
        assert_eq!(counts, vec![3, 2, 2]);
        assert_eq!(counts.iter().sum::<usize>(), room.tasks.len());
    }

    #[test]
    fn test_pending_items() {
        let store = DataStore::embedded().unwrap();
        assert_eq!(pending_document_requests(&store.deal_room).len(), 4);
        assert_eq!(pending_questions(&store.deal_room).len(), 2);
    }

    #[test]
    fn test_tab_change_resets_scroll() {
        let mut state = DealRoomState::default();
        state.scroll_down();
        state.scroll_down();
        state.set_tab(DealRoomTab::Overview);
        assert_eq!(state.scroll, 2);
        state.set_tab(DealRoomTab::Overview.next());
        assert_eq!(state.tab, DealRoomTab::Tasks);
        assert_eq!(state.scroll, 0);
        assert_eq!(DealRoomTab::Overview.prev(), DealRoomTab::DealDetails);
    }
}
