//! Application state management for the CareOwner terminal portal.
//!
//! This module contains the `App` struct that owns the data store, the
//! navigator, one view-state value per screen and the channel that carries
//! simulated assistant replies back to the main loop.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use careowner_core::models::{Buyer, Offer, OfferDetail};
use careowner_core::navigation::Crumb;
use careowner_core::views::{
    canned_reply, AssistantChat, BrowseState, BuyerListState, BuyerMarks, DashboardAction,
    DashboardState, DealPrepTab, DealRoomState, FacilitiesState, FinancialsState, InterestState,
    MeetingsState, MessagesState, OfferListState, OfferResponse, PracticeProfileState, TeamState,
    REPLY_DELAY,
};
use careowner_core::{Config, DataStore, Navigator, Page};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Longest text accepted by any single-line input.
const MAX_INPUT_LENGTH: usize = 500;

/// Rows skipped by page up/down in scrolling panes.
pub const PAGE_SCROLL_SIZE: u16 = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    Content,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    /// Typing into the assistant chat or a message reply
    Composing,
    ShowingHelp,
    Reordering,
    Responding,
    EditingMember,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Results sent back to the main loop from spawned tasks.
#[derive(Debug)]
enum BackgroundResult {
    /// The assistant finished "thinking" about a question on an offer
    AssistantReply { offer_id: String, content: String },
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    pub store: DataStore,
    pub nav: Navigator,

    // UI State
    pub state: AppState,
    pub focus: Focus,
    pub menu_selection: usize,
    /// Scroll offset for read-only detail panes
    pub detail_scroll: u16,

    // Per-screen view state
    pub dashboard: DashboardState,
    pub offers: OfferListState,
    pub buyers: BuyerListState,
    pub browse: BrowseState,
    pub buyer_marks: BuyerMarks,
    pub messages: MessagesState,
    pub deal_room: DealRoomState,
    pub meetings: MeetingsState,
    pub interest: InterestState,
    pub team: TeamState,
    pub profile: PracticeProfileState,
    pub financials: FinancialsState,
    pub facilities: FacilitiesState,
    pub deal_prep_tab: DealPrepTab,
    pub recommendation_selection: usize,

    // Offer detail
    pub chats: HashMap<String, AssistantChat>,
    pub response: OfferResponse,
    reply_delay: Duration,

    // Background task channel
    background_rx: mpsc::Receiver<BackgroundResult>,
    background_tx: mpsc::Sender<BackgroundResult>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance over a loaded store
    pub fn new(config: Config, store: DataStore) -> Self {
        let start = config.start_page();
        debug!(start = %start, "App::new()");
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Self {
            config,
            store,
            nav: Navigator::new(start),

            state: AppState::Normal,
            focus: Focus::Content,
            menu_selection: start.menu_index(),
            detail_scroll: 0,

            dashboard: DashboardState::default(),
            offers: OfferListState::default(),
            buyers: BuyerListState::default(),
            browse: BrowseState::default(),
            buyer_marks: BuyerMarks::default(),
            messages: MessagesState::default(),
            deal_room: DealRoomState::default(),
            meetings: MeetingsState::default(),
            interest: InterestState::default(),
            team: TeamState::default(),
            profile: PracticeProfileState::default(),
            financials: FinancialsState::default(),
            facilities: FacilitiesState::default(),
            deal_prep_tab: DealPrepTab::default(),
            recommendation_selection: 0,

            chats: HashMap::new(),
            response: OfferResponse::default(),
            reply_delay: REPLY_DELAY,

            background_rx: rx,
            background_tx: tx,

            status_message: None,
        }
    }

    pub fn page(&self) -> Page {
        self.nav.page()
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        self.nav.breadcrumbs()
    }

    pub fn owner_name(&self) -> &str {
        self.config.owner_name()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, page: Page) {
        self.nav.navigate(page);
        self.after_navigation();
    }

    pub fn view_buyer(&mut self, buyer_id: &str) {
        self.nav.view_buyer(buyer_id);
        self.after_navigation();
    }

    pub fn view_offer(&mut self, offer_id: &str) {
        self.nav.view_offer(offer_id);
        self.chats
            .entry(offer_id.to_string())
            .or_insert_with(|| AssistantChat::new(offer_id));
        self.after_navigation();
    }

    /// Leave a detail page for its parent
    pub fn back(&mut self) {
        self.nav.back();
        self.after_navigation();
    }

    fn after_navigation(&mut self) {
        self.detail_scroll = 0;
        self.status_message = None;
        self.focus = Focus::Content;
        self.menu_selection = self.page().menu_index();
        info!(page = %self.page(), "Navigated");
    }

    /// Open the page highlighted in the sidebar
    pub fn open_menu_selection(&mut self) {
        if let Some(&page) = Page::MENU.get(self.menu_selection) {
            self.navigate(page);
        }
    }

    pub fn run_dashboard_action(&mut self) {
        match self.dashboard.activate(&self.store) {
            Some(DashboardAction::Navigate(page)) => self.navigate(page),
            Some(DashboardAction::ViewBuyer(id)) => self.view_buyer(&id),
            None => {}
        }
    }

    // =========================================================================
    // Selection helpers
    // =========================================================================

    pub fn selected_buyer(&self) -> Option<&Buyer> {
        self.nav
            .selected_buyer_id()
            .and_then(|id| self.store.buyer(id))
    }

    /// The offer shown on the detail page, with its long-form content
    pub fn selected_offer(&self) -> Option<(&Offer, &OfferDetail)> {
        let id = self.nav.selected_offer_id()?;
        Some((self.store.offer(id)?, self.store.offer_detail(id)?))
    }

    pub fn current_chat(&self) -> Option<&AssistantChat> {
        self.nav.selected_offer_id().and_then(|id| self.chats.get(id))
    }

    pub fn current_chat_mut(&mut self) -> Option<&mut AssistantChat> {
        let id = self.nav.selected_offer_id()?;
        self.chats.get_mut(id)
    }

    /// Search text for the current page, if it has a search box
    pub fn search_text(&self) -> Option<&str> {
        match self.page() {
            Page::Buyers => Some(&self.buyers.search),
            Page::BrowseBuyers => Some(&self.browse.search),
            Page::Messages => Some(&self.messages.search),
            _ => None,
        }
    }

    /// Apply an edit to the current page's search text and reset its selection
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        match self.page() {
            Page::Buyers => {
                let mut text = std::mem::take(&mut self.buyers.search);
                edit(&mut text);
                self.buyers.set_search(text);
            }
            Page::BrowseBuyers => {
                let mut text = std::mem::take(&mut self.browse.search);
                edit(&mut text);
                self.browse.set_search(text);
            }
            Page::Messages => {
                let mut text = std::mem::take(&mut self.messages.search);
                edit(&mut text);
                self.messages.set_search(text);
            }
            _ => {}
        }
    }

    /// Text box being typed into while composing
    pub fn compose_buffer(&mut self) -> Option<&mut String> {
        match self.page() {
            Page::OfferDetail => self.current_chat_mut().map(|chat| &mut chat.input),
            Page::Messages => Some(&mut self.messages.reply),
            _ => None,
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Send the chat input to the assistant; the reply arrives after a delay.
    pub fn ask_assistant(&mut self) {
        let Some(offer_id) = self.nav.selected_offer_id().map(str::to_string) else {
            return;
        };
        let Some(question) = self.current_chat_mut().and_then(|chat| chat.submit()) else {
            return;
        };
        let content = match (self.store.offer(&offer_id), self.store.offer_detail(&offer_id)) {
            (Some(offer), Some(detail)) => canned_reply(&question, offer, detail),
            _ => {
                warn!(offer_id = %offer_id, "Assistant asked about an unknown offer");
                return;
            }
        };

        let tx = self.background_tx.clone();
        let delay = self.reply_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx
                .send(BackgroundResult::AssistantReply { offer_id, content })
                .await;
        });
    }

    /// Drain finished background work into the app state
    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.background_rx.try_recv() {
            results.push(result);
        }

        for result in results {
            self.process_background_result(result);
        }
    }

    fn process_background_result(&mut self, result: BackgroundResult) {
        match result {
            BackgroundResult::AssistantReply { offer_id, content } => {
                debug!(offer_id = %offer_id, "Assistant reply received");
                if let Some(chat) = self.chats.get_mut(&offer_id) {
                    chat.receive(content);
                }
            }
        }
    }

    pub fn send_message_reply(&mut self) {
        let owner = self.config.owner_name().to_string();
        let now = Local::now().naive_local();
        if self.messages.send_reply(&mut self.store.threads, &owner, now) {
            self.status_message = Some("Reply sent".to_string());
        }
    }

    pub fn open_response_form(&mut self) {
        if self.selected_offer().is_some() {
            self.state = AppState::Responding;
        }
    }

    pub fn send_offer_response(&mut self) {
        let Some(offer) = self
            .nav
            .selected_offer_id()
            .and_then(|id| self.store.offer(id))
        else {
            self.state = AppState::Normal;
            return;
        };
        let (choice, _) = self.response.send(offer);
        self.status_message = Some(format!(
            "Response sent to {}: {}",
            offer.buyer_name,
            choice.label()
        ));
        self.state = AppState::Normal;
    }

    pub fn open_member_form(&mut self) {
        self.team.open_form();
        self.state = AppState::EditingMember;
    }

    pub fn save_member(&mut self) {
        if self.team.save_member(&mut self.store.practice) {
            self.status_message = Some("Team member added".to_string());
            self.state = AppState::Normal;
        } else {
            self.status_message = Some("A name is required".to_string());
        }
    }

    pub fn cancel_member_form(&mut self) {
        self.team.cancel_form();
        self.state = AppState::Normal;
    }

    pub fn cycle_selling_status(&mut self) {
        self.profile.cycle_selling_status(&mut self.store.practice);
    }

    pub fn open_reorder(&mut self) {
        self.offers.open_reorder(&self.store.offers);
        self.state = AppState::Reordering;
    }

    pub fn finish_reorder(&mut self, save: bool) {
        if save {
            self.offers.save_reorder();
        } else {
            self.offers.cancel_reorder();
        }
        self.state = AppState::Normal;
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character should be accepted into a text input
pub fn can_add_input_char(current_len: usize, c: char) -> bool {
    current_len < MAX_INPUT_LENGTH && !c.is_control()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use careowner_core::views::ChatRole;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Config::default(), DataStore::embedded().unwrap())
    }

    #[test]
    fn test_start_page_from_config() {
        let config = Config {
            start_page: Some("offers".to_string()),
            ..Default::default()
        };
        let app = App::new(config, DataStore::embedded().unwrap());
        assert_eq!(app.page(), Page::Offers);
        assert_eq!(app.menu_selection, Page::Offers.menu_index());
    }

    #[test]
    fn test_view_offer_creates_chat_and_back_returns() {
        let mut app = app();
        app.navigate(Page::Offers);
        app.view_offer("2");
        assert_eq!(app.page(), Page::OfferDetail);
        assert_eq!(app.current_chat().unwrap().messages.len(), 1);
        assert!(app.selected_offer().is_some());

        app.back();
        assert_eq!(app.page(), Page::Offers);
        assert!(app.current_chat().is_none());
    }

    #[test]
    fn test_unknown_buyer_has_no_profile() {
        let mut app = app();
        app.view_buyer("999");
        assert_eq!(app.page(), Page::BuyerProfile);
        assert!(app.selected_buyer().is_none());
    }

    #[test]
    fn test_search_edits_follow_page() {
        let mut app = app();
        app.navigate(Page::Messages);
        app.messages.selection = 4;
        app.edit_search(|s| s.push_str("lee"));
        assert_eq!(app.search_text(), Some("lee"));
        assert_eq!(app.messages.selection, 0);
        assert_eq!(app.buyers.search, "");

        app.navigate(Page::Dashboard);
        assert_eq!(app.search_text(), None);
    }

    #[tokio::test]
    async fn test_assistant_reply_arrives_through_channel() {
        let mut app = app();
        app.reply_delay = Duration::from_millis(20);
        app.view_offer("1");
        app.current_chat_mut().unwrap().input = "What is the price?".to_string();
        app.ask_assistant();
        assert!(app.current_chat().unwrap().is_thinking());

        // Nothing has arrived yet
        app.check_background_tasks();
        assert!(app.current_chat().unwrap().is_thinking());

        tokio::time::sleep(Duration::from_millis(150)).await;
        app.check_background_tasks();

        let chat = app.current_chat().unwrap();
        assert!(!chat.is_thinking());
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2].role, ChatRole::Assistant);
        assert!(chat.messages[2].content.starts_with("The total offer amount is"));
    }

    #[test]
    fn test_reply_to_thread() {
        let mut app = app();
        app.navigate(Page::Messages);
        app.messages.open_thread = Some("thread-4".to_string());
        app.messages.reply = "Thanks, Emily.".to_string();
        app.send_message_reply();
        let thread = app.store.thread("thread-4").unwrap();
        assert_eq!(thread.last_message, "Thanks, Emily.");
        assert_eq!(app.status_message.as_deref(), Some("Reply sent"));
    }

    #[test]
    fn test_member_form_requires_name() {
        let mut app = app();
        app.navigate(Page::Team);
        app.open_member_form();
        app.save_member();
        assert_eq!(app.state, AppState::EditingMember);

        app.team.form.as_mut().unwrap().name = "Dr. Kim".to_string();
        app.save_member();
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.store.practice.team.len(), 4);
    }

    #[test]
    fn test_reorder_round_trip_through_app() {
        let mut app = app();
        app.navigate(Page::Offers);
        app.open_reorder();
        assert_eq!(app.state, AppState::Reordering);
        app.offers.move_down(0);
        app.finish_reorder(true);
        assert!(app.offers.is_custom_ordered());
        assert_eq!(app.state, AppState::Normal);
    }

    #[test]
    fn test_dashboard_activity_navigates() {
        let mut app = app();
        app.run_dashboard_action();
        assert_eq!(app.page(), Page::Offers);
    }

    #[test]
    fn test_input_char_limits() {
        assert!(can_add_input_char(0, 'a'));
        assert!(!can_add_input_char(0, '\n'));
        assert!(!can_add_input_char(MAX_INPUT_LENGTH, 'a'));
    }
}
