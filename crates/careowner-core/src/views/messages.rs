//! Message inbox: thread tabs, search and the reply composer.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::{clamp_selection, select_next, select_prev};
use crate::models::{Message, MessageThread, ThreadKind, OWNER_SENDER_ID};
use crate::utils::contains_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadTab {
    #[default]
    All,
    Questions,
    PotentialBuyers,
    CurrentDeal,
    PracticeStaff,
}

impl ThreadTab {
    pub const ALL: [ThreadTab; 5] = [
        ThreadTab::All,
        ThreadTab::Questions,
        ThreadTab::PotentialBuyers,
        ThreadTab::CurrentDeal,
        ThreadTab::PracticeStaff,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ThreadTab::All => "All",
            ThreadTab::Questions => "Questions",
            ThreadTab::PotentialBuyers => "Potential Buyers",
            ThreadTab::CurrentDeal => "Current Deal",
            ThreadTab::PracticeStaff => "Practice Staff",
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

    fn includes(&self, thread: &MessageThread) -> bool {
        match self {
            ThreadTab::All => true,
            ThreadTab::Questions => thread.kind == ThreadKind::Question,
            ThreadTab::PotentialBuyers => thread.kind == ThreadKind::PotentialBuyer,
            ThreadTab::CurrentDeal => thread.kind == ThreadKind::CurrentDeal,
            ThreadTab::PracticeStaff => thread.kind == ThreadKind::PracticeStaff,
        }
    }
}

/// Sum of every thread's unread count
pub fn total_unread(threads: &[MessageThread]) -> u32 {
    threads.iter().map(|t| t.unread_count).sum()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagesState {
    pub tab: ThreadTab,
    pub search: String,
    pub selection: usize,
    /// Thread shown in the conversation pane
    pub open_thread: Option<String>,
    pub reply: String,
    /// For question threads: mark the thread answered when the reply is sent
    pub publish_answer: bool,
}

impl MessagesState {
    /// Threads in the current tab matching the search, newest first
    pub fn visible<'a>(&self, threads: &'a [MessageThread]) -> Vec<&'a MessageThread> {
        let query = self.search.trim().to_lowercase();
        let mut visible: Vec<&MessageThread> = threads
            .iter()
            .filter(|t| self.tab.includes(t))
            .filter(|t| {
                query.is_empty()
                    || contains_ignore_case(&t.participant_name, &query)
                    || contains_ignore_case(&t.subject, &query)
                    || contains_ignore_case(&t.last_message, &query)
            })
            .collect();
        visible.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));
        visible
    }

    pub fn tab_counts(threads: &[MessageThread]) -> Vec<(ThreadTab, usize)> {
        ThreadTab::ALL
            .iter()
            .map(|&tab| (tab, threads.iter().filter(|t| tab.includes(t)).count()))
            .collect()
    }

    pub fn set_tab(&mut self, tab: ThreadTab) {
        if self.tab != tab {
            debug!(tab = tab.title(), "Message tab changed");
            self.tab = tab;
            self.selection = 0;
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.selection = 0;
    }

    pub fn selected<'a>(&self, threads: &'a [MessageThread]) -> Option<&'a MessageThread> {
        let visible = self.visible(threads);
        visible.get(clamp_selection(self.selection, visible.len())).copied()
    }

    /// Open the highlighted thread in the conversation pane
    pub fn open_selected(&mut self, threads: &[MessageThread]) {
        let id = self.selected(threads).map(|t| t.id.clone());
        if id != self.open_thread {
            self.reply.clear();
            self.publish_answer = false;
        }
        debug!(thread = ?id, "Thread opened");
        self.open_thread = id;
    }

    pub fn close_thread(&mut self) {
        self.open_thread = None;
        self.reply.clear();
        self.publish_answer = false;
    }

    pub fn toggle_publish_answer(&mut self) {
        self.publish_answer = !self.publish_answer;
    }

    /// Append the reply to the open thread as an owner message.
    ///
    /// Blank replies and replies with no open thread are ignored and return
    /// false. On success the composer is cleared.
    pub fn send_reply(
        &mut self,
        threads: &mut [MessageThread],
        owner_name: &str,
        now: NaiveDateTime,
    ) -> bool {
        let content = self.reply.trim();
        if content.is_empty() {
            return false;
        }
        let Some(id) = self.open_thread.as_deref() else {
            return false;
        };
        let Some(thread) = threads.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        let message = Message {
            id: format!("{}-reply-{}", thread.id, thread.messages.len() + 1),
            sender_id: OWNER_SENDER_ID.to_string(),
            sender_name: owner_name.to_string(),
            sender_role: "Practice Owner".to_string(),
            subject: None,
            content: content.to_string(),
            timestamp: now,
            is_read: true,
            thread_id: thread.id.clone(),
            buyer_id: thread.buyer_id.clone(),
            buyer_name: None,
            is_question: None,
            is_answered: None,
        };
        thread.last_message = message.content.clone();
        thread.last_message_time = now;
        if thread.is_question && self.publish_answer {
            thread.is_answered = true;
        }
        info!(
            thread = %thread.id,
            answered = thread.is_answered,
            "Reply sent"
        );
        thread.messages.push(message);

        self.reply.clear();
        self.publish_answer = false;
        true
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
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ids(threads: &[&MessageThread]) -> Vec<String> {
        threads.iter().map(|t| t.id.clone()).collect()
    }

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 13)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_threads_sorted_newest_first() {
        let store = DataStore::embedded().unwrap();
        let state = MessagesState::default();
        assert_eq!(
            ids(&state.visible(&store.threads)),
            vec![
                "thread-8", "thread-3", "thread-7", "thread-1", "thread-4", "thread-10",
                "thread-2", "thread-9", "thread-5", "thread-6",
            ]
        );
    }

    #[test]
    fn test_question_tab() {
        let store = DataStore::embedded().unwrap();
        let mut state = MessagesState::default();
        state.set_tab(ThreadTab::Questions);
        assert_eq!(
            ids(&state.visible(&store.threads)),
            vec!["thread-8", "thread-10", "thread-2", "thread-5"]
        );
    }

    #[test]
    fn test_search_matches_participant_case_insensitive() {
        let store = DataStore::embedded().unwrap();
        let mut state = MessagesState::default();
        state.set_search("TORRES".to_string());
        assert_eq!(ids(&state.visible(&store.threads)), vec!["thread-2"]);

        state.set_search("lease terms".to_string());
        assert!(ids(&state.visible(&store.threads)).contains(&"thread-10".to_string()));
    }

    #[test]
    fn test_counts_and_unread() {
        let store = DataStore::embedded().unwrap();
        assert_eq!(
            MessagesState::tab_counts(&store.threads),
            vec![
                (ThreadTab::All, 10),
                (ThreadTab::Questions, 4),
                (ThreadTab::PotentialBuyers, 2),
                (ThreadTab::CurrentDeal, 2),
                (ThreadTab::PracticeStaff, 2),
            ]
        );
        assert_eq!(total_unread(&store.threads), 6);
    }

    #[test]
    fn test_blank_reply_ignored() {
        let mut store = DataStore::embedded().unwrap();
        let mut state = MessagesState {
            open_thread: Some("thread-1".to_string()),
            reply: "   ".to_string(),
            ..Default::default()
        };
        assert!(!state.send_reply(&mut store.threads, "Dr. Williams", stamp()));
        assert_eq!(store.thread("thread-1").unwrap().messages.len(), 3);
    }

    #[test]
    fn test_reply_appends_owner_message() {
        let mut store = DataStore::embedded().unwrap();
        let mut state = MessagesState {
            open_thread: Some("thread-1".to_string()),
            reply: " Happy to talk next week. ".to_string(),
            ..Default::default()
        };
        assert!(state.send_reply(&mut store.threads, "Dr. Williams", stamp()));
        assert!(state.reply.is_empty());

        let thread = store.thread("thread-1").unwrap();
        let last = thread.messages.last().unwrap();
        assert!(last.is_from_owner());
        assert_eq!(last.content, "Happy to talk next week.");
        assert_eq!(thread.last_message, "Happy to talk next week.");
        assert_eq!(thread.last_message_time, stamp());

        // The replied thread moves to the top
        let visible = MessagesState::default();
        assert_eq!(visible.visible(&store.threads)[0].id, "thread-1");
    }

    #[test]
    fn test_publish_answer_marks_question_answered() {
        let mut store = DataStore::embedded().unwrap();
        let mut state = MessagesState {
            open_thread: Some("thread-2".to_string()),
            reply: "All equipment is under five years old.".to_string(),
            ..Default::default()
        };
        state.send_reply(&mut store.threads, "Dr. Williams", stamp());
        assert!(!store.thread("thread-2").unwrap().is_answered);

        state.reply = "Service records are available.".to_string();
        state.toggle_publish_answer();
        state.send_reply(&mut store.threads, "Dr. Williams", stamp());
        assert!(store.thread("thread-2").unwrap().is_answered);
        assert!(!state.publish_answer);
    }

    #[test]
    fn test_open_selected_follows_visible_order() {
        let store = DataStore::embedded().unwrap();
        let mut state = MessagesState {
            reply: "draft".to_string(),
            ..Default::default()
        };
        state.select_next(10);
        state.open_selected(&store.threads);
        assert_eq!(state.open_thread.as_deref(), Some("thread-3"));
        assert!(state.reply.is_empty());
        state.close_thread();
        assert_eq!(state.open_thread, None);
    }
}
