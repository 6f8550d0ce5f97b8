//! Buyer interest requests, split into open and declined.

use super::{clamp_selection, select_next, select_prev};
use crate::models::{InterestRequest, InterestStatus};

/// Requests that are still open: anything not declined
pub fn active_interests(interests: &[InterestRequest]) -> Vec<&InterestRequest> {
    interests
        .iter()
        .filter(|i| i.status != InterestStatus::Declined)
        .collect()
}

pub fn declined_interests(interests: &[InterestRequest]) -> Vec<&InterestRequest> {
    interests
        .iter()
        .filter(|i| i.status == InterestStatus::Declined)
        .collect()
}

pub fn status_counts(interests: &[InterestRequest]) -> Vec<(InterestStatus, usize)> {
    InterestStatus::ALL
        .iter()
        .map(|&s| (s, interests.iter().filter(|i| i.status == s).count()))
        .collect()
}

/// One cursor runs over the active list followed by the declined list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestState {
    pub selection: usize,
}

impl InterestState {
    pub fn entries<'a>(&self, interests: &'a [InterestRequest]) -> Vec<&'a InterestRequest> {
        let mut entries = active_interests(interests);
        entries.extend(declined_interests(interests));
        entries
    }

    pub fn selected<'a>(&self, interests: &'a [InterestRequest]) -> Option<&'a InterestRequest> {
        let entries = self.entries(interests);
        entries.get(clamp_selection(self.selection, entries.len())).copied()
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

    #[test]
    fn test_active_excludes_declined() {
        let store = DataStore::embedded().unwrap();
        let active: Vec<&str> = active_interests(&store.interests)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(active, vec!["1", "2", "3", "4", "5"]);
        let declined = declined_interests(&store.interests);
        assert_eq!(declined.len(), 1);
        assert_eq!(declined[0].buyer_name, "VetCorp Partners");
    }

    #[test]
    fn test_status_counts() {
        let store = DataStore::embedded().unwrap();
        let counts = status_counts(&store.interests);
        let count = |s| counts.iter().find(|(k, _)| *k == s).map(|(_, n)| *n);
        assert_eq!(count(InterestStatus::Pending), Some(2));
        assert_eq!(count(InterestStatus::Responded), Some(2));
        assert_eq!(count(InterestStatus::ScheduledMeeting), Some(1));
        assert_eq!(count(InterestStatus::Declined), Some(1));
    }

    #[test]
    fn test_cursor_reaches_declined_section() {
        let store = DataStore::embedded().unwrap();
        let mut state = InterestState::default();
        let len = state.entries(&store.interests).len();
        for _ in 0..10 {
            state.select_next(len);
        }
        assert_eq!(state.selected(&store.interests).unwrap().id, "6");
    }
}
