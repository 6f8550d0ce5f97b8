//! Keyboard input handling for the TUI.
//!
//! Modal states (help, quit confirmation, search, composing and the three
//! dialogs) get first claim on a key. Anything left goes to the sidebar or
//! the handler for the current page.

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use careowner_core::views::{select_next, select_prev, MemberField};
use careowner_core::Page;

use crate::app::{can_add_input_char, App, AppState, Focus, PAGE_SCROLL_SIZE};
use crate::ui::pages::offers::sort_field_for_key;

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    match app.state {
        AppState::Searching => return handle_search_input(app, key).await,
        AppState::Composing => return handle_compose_input(app, key).await,
        AppState::Reordering => return handle_reorder_input(app, key).await,
        AppState::Responding => return handle_response_input(app, key).await,
        AppState::EditingMember => return handle_member_form_input(app, key).await,
        _ => {}
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return Ok(false);
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return Ok(false);
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Menu => Focus::Content,
                Focus::Content => Focus::Menu,
            };
        }
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('/') if app.search_text().is_some() => {
            app.state = AppState::Searching;
            app.edit_search(|s| s.clear());
        }
        KeyCode::PageDown => {
            app.detail_scroll = app.detail_scroll.saturating_add(PAGE_SCROLL_SIZE);
        }
        KeyCode::PageUp => {
            app.detail_scroll = app.detail_scroll.saturating_sub(PAGE_SCROLL_SIZE);
        }
        _ if app.focus == Focus::Menu => handle_menu_input(app, key),
        _ => match app.page() {
            Page::Dashboard => handle_dashboard_input(app, key).await?,
            Page::Offers => handle_offers_input(app, key).await?,
            Page::OfferDetail => handle_offer_detail_input(app, key).await?,
            Page::Buyers => handle_buyers_input(app, key).await?,
            Page::BrowseBuyers => handle_browse_input(app, key).await?,
            Page::BuyerProfile => handle_scroll_input(app, key),
            Page::Messages => handle_messages_input(app, key).await?,
            Page::DealRoom => handle_deal_room_input(app, key).await?,
            Page::Meetings => handle_meetings_input(app, key).await?,
            Page::Interest => handle_interest_input(app, key).await?,
            Page::Recommendations => handle_recommendations_input(app, key),
            Page::PracticeProfile => handle_profile_input(app, key).await?,
            Page::Team => handle_team_input(app, key).await?,
            Page::Financials => handle_financials_input(app, key),
            Page::Facilities => handle_facilities_input(app, key),
            Page::Reviews => handle_scroll_input(app, key),
            Page::DealPreparation => handle_deal_prep_input(app, key),
            Page::Documents | Page::Account | Page::Settings => {}
        },
    }

    Ok(false)
}

/// Esc closes whatever is open on the page, then walks up to the parent page
fn handle_escape(app: &mut App) {
    if app.focus == Focus::Menu {
        app.focus = Focus::Content;
    } else if app.page() == Page::Messages && app.messages.open_thread.is_some() {
        app.messages.close_thread();
        app.detail_scroll = 0;
    } else if app.page() == Page::PracticeProfile && app.profile.settings_cursor.is_some() {
        app.profile.toggle_settings();
    } else if app.page().parent().is_some() {
        app.back();
    } else {
        app.status_message = None;
    }
}

fn handle_menu_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            select_next(&mut app.menu_selection, Page::MENU.len());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            select_prev(&mut app.menu_selection);
        }
        KeyCode::Home => app.menu_selection = 0,
        KeyCode::End => app.menu_selection = Page::MENU.len() - 1,
        KeyCode::Enter => app.open_menu_selection(),
        _ => {}
    }
}

/// Up and down move the shared detail scroll
fn handle_scroll_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        KeyCode::Home => app.detail_scroll = 0,
        _ => {}
    }
}

// ============================================================================
// Modal states
// ============================================================================

async fn handle_search_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
            app.edit_search(|s| s.clear());
        }
        KeyCode::Enter => {
            app.state = AppState::Normal;
            // Keep search query active
        }
        KeyCode::Backspace => {
            app.edit_search(|s| {
                s.pop();
            });
        }
        KeyCode::Char(c) => {
            let len = app.search_text().map_or(0, str::len);
            if can_add_input_char(len, c) {
                app.edit_search(|s| s.push(c));
            }
        }
        _ => {}
    }
    Ok(false)
}

async fn handle_compose_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
        }
        KeyCode::Enter => {
            app.state = AppState::Normal;
            match app.page() {
                Page::OfferDetail => app.ask_assistant(),
                Page::Messages => app.send_message_reply(),
                _ => {}
            }
        }
        KeyCode::Backspace => {
            if let Some(buffer) = app.compose_buffer() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buffer) = app.compose_buffer() {
                if can_add_input_char(buffer.len(), c) {
                    buffer.push(c);
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

async fn handle_reorder_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.finish_reorder(true),
        KeyCode::Esc => app.finish_reorder(false),
        _ => {
            let Some(draft) = app.offers.reorder.as_mut() else {
                app.state = AppState::Normal;
                return Ok(false);
            };
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => draft.cursor_down(),
                KeyCode::Char('k') | KeyCode::Up => draft.cursor_up(),
                KeyCode::Char('u') => draft.move_cursor_item_up(),
                KeyCode::Char('d') => draft.move_cursor_item_down(),
                _ => {}
            }
        }
    }
    Ok(false)
}

async fn handle_response_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.response.choice = app.response.choice.toggle();
        }
        KeyCode::Enter => app.send_offer_response(),
        KeyCode::Backspace => {
            app.response.message.pop();
        }
        KeyCode::Char(c) => {
            if can_add_input_char(app.response.message.len(), c) {
                app.response.message.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

async fn handle_member_form_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.cancel_member_form(),
        KeyCode::Enter => app.save_member(),
        KeyCode::Tab | KeyCode::Down => app.team.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.team.prev_field(),
        KeyCode::Char('n') if ctrl => app.team.add_experience_field(),
        KeyCode::Char('d') if ctrl => {
            if let Some(MemberField::Experience(index)) = app.team.focused_field() {
                if let Some(form) = app.team.form.as_mut() {
                    form.remove_experience_field(index);
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = app.team.focused_field() {
                let today = Local::now().date_naive();
                if let Some(form) = app.team.form.as_mut() {
                    form.pop_char(field, today);
                }
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(field) = app.team.focused_field() {
                let today = Local::now().date_naive();
                if let Some(form) = app.team.form.as_mut() {
                    if can_add_input_char(form.text(field).len(), c) {
                        form.push_char(field, c, today);
                    }
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

// ============================================================================
// Pages
// ============================================================================

async fn handle_dashboard_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Left | KeyCode::Right => app.dashboard.toggle_panel(),
        KeyCode::Char('j') | KeyCode::Down => app.dashboard.select_next(&app.store),
        KeyCode::Char('k') | KeyCode::Up => app.dashboard.select_prev(),
        KeyCode::Enter => app.run_dashboard_action(),
        _ => {}
    }
    Ok(())
}

async fn handle_offers_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.offers.select_next(&app.store.offers),
        KeyCode::Char('k') | KeyCode::Up => app.offers.select_prev(),
        KeyCode::Left => {
            let tab = app.offers.tab.prev();
            app.offers.set_tab(tab);
        }
        KeyCode::Right => {
            let tab = app.offers.tab.next();
            app.offers.set_tab(tab);
        }
        KeyCode::Char('v') => app.offers.toggle_view_mode(),
        KeyCode::Char('o') => app.open_reorder(),
        KeyCode::Char(c) => {
            if let Some(field) = sort_field_for_key(c) {
                app.offers.handle_sort(field);
            }
        }
        KeyCode::Enter => {
            let id = app
                .offers
                .selected(&app.store.offers)
                .map(|offer| offer.id.clone());
            if let Some(id) = id {
                app.view_offer(&id);
            }
        }
        _ => {}
    }
    Ok(())
}

async fn handle_offer_detail_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('c') => {
            if app.current_chat().is_some() {
                app.state = AppState::Composing;
            }
        }
        KeyCode::Char('r') => app.open_response_form(),
        _ => handle_scroll_input(app, key),
    }
    Ok(())
}

async fn handle_buyers_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let len = app.buyers.visible(&app.store.buyers, &app.buyer_marks).len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.buyers.select_next(len),
        KeyCode::Char('k') | KeyCode::Up => app.buyers.select_prev(),
        KeyCode::Left => {
            let category = app.buyers.category.prev();
            app.buyers.set_category(category);
        }
        KeyCode::Right => {
            let category = app.buyers.category.next();
            app.buyers.set_category(category);
        }
        KeyCode::Char('b') => app.navigate(Page::BrowseBuyers),
        KeyCode::Enter => {
            let id = app
                .buyers
                .selected(&app.store.buyers, &app.buyer_marks)
                .map(|buyer| buyer.id.clone());
            if let Some(id) = id {
                app.view_buyer(&id);
            }
        }
        _ => {}
    }
    Ok(())
}

async fn handle_browse_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let len = app.browse.visible(&app.store.buyers).len();
    let selected = app
        .browse
        .selected(&app.store.buyers)
        .map(|buyer| (buyer.id.clone(), buyer.name.clone()));

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.browse.select_next(len),
        KeyCode::Char('k') | KeyCode::Up => app.browse.select_prev(),
        KeyCode::Char('t') => app.browse.cycle_type_filter(),
        KeyCode::Char('s') => {
            if let Some((id, name)) = selected {
                let message = if app.buyer_marks.toggle_saved(&id) {
                    format!("Saved {}", name)
                } else {
                    format!("Removed {} from saved buyers", name)
                };
                app.status_message = Some(message);
            }
        }
        KeyCode::Char('c') => {
            if let Some((id, name)) = selected {
                app.buyer_marks.mark_contacted(&id);
                app.status_message = Some(format!("Contact request sent to {}", name));
            }
        }
        KeyCode::Enter => {
            if let Some((id, _)) = selected {
                app.view_buyer(&id);
            }
        }
        _ => {}
    }
    Ok(())
}

async fn handle_messages_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let thread_open = app.messages.open_thread.is_some();
    match key.code {
        KeyCode::Left => {
            let tab = app.messages.tab.prev();
            app.messages.set_tab(tab);
        }
        KeyCode::Right => {
            let tab = app.messages.tab.next();
            app.messages.set_tab(tab);
        }
        KeyCode::Enter => {
            app.messages.open_selected(&app.store.threads);
            app.detail_scroll = 0;
        }
        KeyCode::Char('r') if thread_open => {
            app.state = AppState::Composing;
        }
        KeyCode::Char('p') if thread_open => app.messages.toggle_publish_answer(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up if thread_open => {
            handle_scroll_input(app, key);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.messages.visible(&app.store.threads).len();
            app.messages.select_next(len);
        }
        KeyCode::Char('k') | KeyCode::Up => app.messages.select_prev(),
        _ => {}
    }
    Ok(())
}

async fn handle_deal_room_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Left => {
            let tab = app.deal_room.tab.prev();
            app.deal_room.set_tab(tab);
        }
        KeyCode::Right => {
            let tab = app.deal_room.tab.next();
            app.deal_room.set_tab(tab);
        }
        KeyCode::Char('j') | KeyCode::Down => app.deal_room.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.deal_room.scroll_up(),
        _ => {}
    }
    Ok(())
}

fn handle_financials_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') => app.financials.cycle_period(),
        KeyCode::Char('c') => app.financials.toggle_compare(),
        KeyCode::Char('m') => app.financials.toggle_compare_target(),
        _ => handle_scroll_input(app, key),
    }
}

fn handle_facilities_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.facilities.prev_tab(),
        KeyCode::Right => app.facilities.next_tab(),
        _ => handle_scroll_input(app, key),
    }
}

fn handle_deal_prep_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            app.deal_prep_tab = app.deal_prep_tab.prev();
            app.detail_scroll = 0;
        }
        KeyCode::Right => {
            app.deal_prep_tab = app.deal_prep_tab.next();
            app.detail_scroll = 0;
        }
        _ => handle_scroll_input(app, key),
    }
}

async fn handle_meetings_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('p') => app.meetings.toggle_past(),
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.meetings.visible(&app.store.meetings).len();
            app.meetings.select_next(len);
        }
        KeyCode::Char('k') | KeyCode::Up => app.meetings.select_prev(),
        KeyCode::Enter => {
            let id = app
                .meetings
                .selected(&app.store.meetings)
                .map(|meeting| meeting.buyer_id.clone());
            if let Some(id) = id {
                app.view_buyer(&id);
            }
        }
        _ => {}
    }
    Ok(())
}

async fn handle_interest_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.interest.select_next(app.store.interests.len());
            app.detail_scroll = 0;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.interest.select_prev();
            app.detail_scroll = 0;
        }
        KeyCode::Enter => {
            let id = app
                .interest
                .selected(&app.store.interests)
                .map(|interest| interest.buyer_id.clone());
            if let Some(id) = id {
                app.view_buyer(&id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_recommendations_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            select_next(
                &mut app.recommendation_selection,
                app.store.recommendations.len(),
            );
        }
        KeyCode::Char('k') | KeyCode::Up => select_prev(&mut app.recommendation_selection),
        _ => {}
    }
}

async fn handle_profile_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('s') => {
            app.cycle_selling_status();
            app.status_message = Some(format!(
                "Selling status: {}",
                app.store.practice.selling_status.label()
            ));
        }
        KeyCode::Char('v') => {
            app.profile.cycle_view_as(app.store.buyers.len());
            app.detail_scroll = 0;
        }
        KeyCode::Char('b') => app.profile.toggle_settings(),
        _ if app.profile.settings_cursor.is_some() => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.profile.settings_next(),
            KeyCode::Char('k') | KeyCode::Up => app.profile.settings_prev(),
            KeyCode::Char(' ') | KeyCode::Enter => app.profile.toggle_at_cursor(),
            _ => {}
        },
        KeyCode::Left => {
            app.profile.prev_tab();
            app.detail_scroll = 0;
        }
        KeyCode::Right => {
            app.profile.next_tab();
            app.detail_scroll = 0;
        }
        _ => handle_scroll_input(app, key),
    }
    Ok(())
}

async fn handle_team_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('a') => app.open_member_form(),
        KeyCode::Char('e') | KeyCode::Char('x') => {
            debug!(key = ?key.code, "Team edit requested");
            app.status_message = Some("Editing team members is not available yet".to_string());
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.team.select_next(app.store.practice.team.len());
        }
        KeyCode::Char('k') | KeyCode::Up => app.team.select_prev(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careowner_core::views::{CompareTo, DealPrepTab, MediaTab, OfferViewMode, TimePeriod};
    use careowner_core::{Config, DataStore};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Config::default(), DataStore::embedded().unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, key(code)).await.unwrap()
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    #[tokio::test]
    async fn test_quit_needs_confirmation() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Char('q')).await);
        assert_eq!(app.state, AppState::ConfirmingQuit);
        assert!(!press(&mut app, KeyCode::Char('n')).await);
        assert_eq!(app.state, AppState::Normal);

        press(&mut app, KeyCode::Char('q')).await;
        assert!(press(&mut app, KeyCode::Char('y')).await);
        assert_eq!(app.state, AppState::Quitting);
    }

    #[tokio::test]
    async fn test_help_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?')).await;
        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.state, AppState::ShowingHelp);
        assert_eq!(app.focus, Focus::Content);
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.state, AppState::Normal);
    }

    #[tokio::test]
    async fn test_menu_opens_page() {
        let mut app = app();
        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.focus, Focus::Menu);
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.page(), Page::MENU[1]);
        assert_eq!(app.focus, Focus::Content);
    }

    #[tokio::test]
    async fn test_offer_keys() {
        let mut app = app();
        app.navigate(Page::Offers);

        let field = sort_field_for_key('3').unwrap();
        press(&mut app, KeyCode::Char('3')).await;
        assert_eq!(app.offers.sort_field, field);
        let direction = app.offers.direction;
        press(&mut app, KeyCode::Char('3')).await;
        assert_eq!(app.offers.direction, direction.toggle());

        press(&mut app, KeyCode::Char('v')).await;
        assert_eq!(app.offers.view_mode, OfferViewMode::Comparison);

        let first = app.offers.selected(&app.store.offers).unwrap().id.clone();
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.page(), Page::OfferDetail);
        assert_eq!(app.nav.selected_offer_id(), Some(first.as_str()));

        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.page(), Page::Offers);
    }

    #[tokio::test]
    async fn test_reorder_dialog() {
        let mut app = app();
        app.navigate(Page::Offers);
        press(&mut app, KeyCode::Char('o')).await;
        assert_eq!(app.state, AppState::Reordering);

        let before: Vec<String> = app.offers.reorder.as_ref().unwrap().ids().to_vec();
        press(&mut app, KeyCode::Char('d')).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        assert!(app.offers.is_custom_ordered());
        assert_eq!(app.offers.custom_order[0], before[1]);
        assert_eq!(app.offers.custom_order[1], before[0]);
    }

    #[tokio::test]
    async fn test_search_typing_and_cancel() {
        let mut app = app();
        app.navigate(Page::Buyers);
        press(&mut app, KeyCode::Char('/')).await;
        assert_eq!(app.state, AppState::Searching);
        type_text(&mut app, "qvet").await;
        press(&mut app, KeyCode::Backspace).await;
        assert_eq!(app.search_text(), Some("qve"));

        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.search_text(), Some("qve"));

        press(&mut app, KeyCode::Char('/')).await;
        type_text(&mut app, "x").await;
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.search_text(), Some(""));
    }

    #[tokio::test]
    async fn test_search_ignored_without_search_box() {
        let mut app = app();
        app.navigate(Page::DealRoom);
        press(&mut app, KeyCode::Char('/')).await;
        assert_eq!(app.state, AppState::Normal);
    }

    #[tokio::test]
    async fn test_assistant_compose() {
        let mut app = app();
        app.view_offer("1");
        press(&mut app, KeyCode::Char('c')).await;
        assert_eq!(app.state, AppState::Composing);
        type_text(&mut app, "list the documents").await;
        assert_eq!(app.current_chat().unwrap().input, "list the documents");

        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        let chat = app.current_chat().unwrap();
        assert!(chat.is_thinking());
        assert!(chat.input.is_empty());
    }

    #[tokio::test]
    async fn test_message_reply() {
        let mut app = app();
        app.navigate(Page::Messages);
        press(&mut app, KeyCode::Char('r')).await;
        assert_eq!(app.state, AppState::Normal);

        press(&mut app, KeyCode::Enter).await;
        assert!(app.messages.open_thread.is_some());
        press(&mut app, KeyCode::Char('r')).await;
        assert_eq!(app.state, AppState::Composing);
        type_text(&mut app, "Sounds good").await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.status_message.as_deref(), Some("Reply sent"));

        press(&mut app, KeyCode::Esc).await;
        assert!(app.messages.open_thread.is_none());
        assert_eq!(app.page(), Page::Messages);
    }

    #[tokio::test]
    async fn test_offer_response_dialog() {
        let mut app = app();
        app.view_offer("1");
        press(&mut app, KeyCode::Char('r')).await;
        assert_eq!(app.state, AppState::Responding);
        let choice = app.response.choice;
        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.response.choice, choice.toggle());
        type_text(&mut app, "Thank you").await;
        assert_eq!(app.response.message, "Thank you");

        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        assert!(app.status_message.as_deref().unwrap().starts_with("Response sent to"));
    }

    #[tokio::test]
    async fn test_member_form() {
        let mut app = app();
        app.navigate(Page::Team);
        let before = app.store.practice.team.len();

        press(&mut app, KeyCode::Char('a')).await;
        assert_eq!(app.state, AppState::EditingMember);
        type_text(&mut app, "Dr. Kim").await;
        assert_eq!(app.team.form.as_ref().unwrap().name, "Dr. Kim");

        handle_input(&mut app, KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(matches!(
            app.team.focused_field(),
            Some(MemberField::Experience(_))
        ));

        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.store.practice.team.len(), before + 1);

        press(&mut app, KeyCode::Char('a')).await;
        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.state, AppState::Normal);
        assert!(app.team.form.is_none());
    }

    #[tokio::test]
    async fn test_browse_save_and_contact() {
        let mut app = app();
        app.navigate(Page::BrowseBuyers);
        let id = app.browse.selected(&app.store.buyers).unwrap().id.clone();
        let was_saved = app.buyer_marks.is_saved(&id);

        press(&mut app, KeyCode::Char('s')).await;
        assert_eq!(app.buyer_marks.is_saved(&id), !was_saved);
        press(&mut app, KeyCode::Char('c')).await;
        assert!(app.buyer_marks.is_contacted(&id));
        assert!(app.status_message.as_deref().unwrap().starts_with("Contact request sent"));
    }

    #[tokio::test]
    async fn test_profile_settings_panel() {
        let mut app = app();
        app.navigate(Page::PracticeProfile);
        press(&mut app, KeyCode::Char('b')).await;
        assert_eq!(app.profile.settings_cursor, Some(0));
        press(&mut app, KeyCode::Down).await;
        assert_eq!(app.profile.settings_cursor, Some(1));

        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.profile.settings_cursor, None);
        assert_eq!(app.page(), Page::PracticeProfile);
    }

    #[tokio::test]
    async fn test_meetings_toggle_past() {
        let mut app = app();
        app.navigate(Page::Meetings);
        press(&mut app, KeyCode::Char('p')).await;
        assert!(app.meetings.show_past);
        press(&mut app, KeyCode::Char('p')).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.page(), Page::BuyerProfile);
        assert!(app.selected_buyer().is_some());
    }

    #[tokio::test]
    async fn test_financials_period_and_comparison_keys() {
        let mut app = app();
        app.navigate(Page::Financials);
        press(&mut app, KeyCode::Char('t')).await;
        assert_eq!(app.financials.period, TimePeriod::YearToDate);

        press(&mut app, KeyCode::Char('m')).await;
        assert_eq!(app.financials.compare_to, CompareTo::MarketBenchmarks);

        // Target is locked while comparison is off
        press(&mut app, KeyCode::Char('c')).await;
        assert!(!app.financials.compare_enabled);
        press(&mut app, KeyCode::Char('m')).await;
        assert_eq!(app.financials.compare_to, CompareTo::MarketBenchmarks);

        press(&mut app, KeyCode::Char('j')).await;
        assert_eq!(app.detail_scroll, 1);
    }

    #[tokio::test]
    async fn test_facilities_media_tabs() {
        let mut app = app();
        app.navigate(Page::Facilities);
        press(&mut app, KeyCode::Right).await;
        assert_eq!(app.facilities.media_tab, MediaTab::Videos);
        press(&mut app, KeyCode::Left).await;
        press(&mut app, KeyCode::Left).await;
        assert_eq!(app.facilities.media_tab, MediaTab::FloorPlan);
    }

    #[tokio::test]
    async fn test_deal_prep_tab_change_resets_scroll() {
        let mut app = app();
        app.navigate(Page::DealPreparation);
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Down).await;
        assert_eq!(app.detail_scroll, 2);

        press(&mut app, KeyCode::Left).await;
        assert_eq!(app.deal_prep_tab, DealPrepTab::MarketCheck);
        assert_eq!(app.detail_scroll, 0);
    }
}
