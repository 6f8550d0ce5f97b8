use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use careowner_core::Page;

use crate::app::{App, AppState, Focus};

use super::pages::{
    buyers, dashboard, deal_prep, deal_room, engagement, facilities, financials, messages,
    offer_detail, offers, practice, reviews,
};
use super::styles;

/// Sidebar width including borders
const SIDEBAR_WIDTH: u16 = 24;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(2), // Breadcrumbs
            Constraint::Min(10),   // Sidebar + content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_breadcrumbs(frame, app, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[2]);

    render_sidebar(frame, app, body[0]);
    render_main_content(frame, app, body[1]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    match app.state {
        AppState::ShowingHelp => render_help_overlay(frame),
        AppState::ConfirmingQuit => render_quit_overlay(frame),
        AppState::Reordering => offers::render_reorder_overlay(frame, app),
        AppState::Responding => offer_detail::render_response_overlay(frame, app),
        AppState::EditingMember => practice::render_member_form(frame, app),
        _ => {}
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("  CareOwner · {}", app.store.practice.business_name);
    let right = format!("{}  [?] Help", app.owner_name());

    let title_line = Line::from(vec![
        Span::styled(title.clone(), styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize).saturating_sub(title.chars().count() + right.chars().count() + 2),
        )),
        Span::styled(right, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_breadcrumbs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, crumb) in app.breadcrumbs().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", styles::muted_style()));
        }
        let style = match crumb.target {
            Some(_) => styles::muted_style(),
            None => styles::tab_style(true),
        };
        spans.push(Span::styled(crumb.label, style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Menu;
    let current = app.page().menu_index();

    let items: Vec<ListItem> = Page::MENU
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let marker = if i == current { "▸ " } else { "  " };
            let style = if i == current {
                styles::highlight_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, styles::highlight_style()),
                Span::styled(page.menu_title(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(focused)),
        )
        .highlight_style(if focused {
            styles::selected_style()
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    state.select(Some(app.menu_selection));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.page() {
        Page::Dashboard => dashboard::render(frame, app, area),
        Page::Offers => offers::render(frame, app, area),
        Page::OfferDetail => offer_detail::render(frame, app, area),
        Page::Buyers => buyers::render_list(frame, app, area),
        Page::BrowseBuyers => buyers::render_browse(frame, app, area),
        Page::BuyerProfile => buyers::render_profile(frame, app, area),
        Page::Messages => messages::render(frame, app, area),
        Page::DealRoom => deal_room::render(frame, app, area),
        Page::PracticeProfile => practice::render_profile(frame, app, area),
        Page::Team => practice::render_team(frame, app, area),
        Page::Interest => engagement::render_interest(frame, app, area),
        Page::Meetings => engagement::render_meetings(frame, app, area),
        Page::Recommendations => engagement::render_recommendations(frame, app, area),
        Page::Financials => financials::render(frame, app, area),
        Page::Facilities => facilities::render(frame, app, area),
        Page::Reviews => reviews::render(frame, app, area),
        Page::DealPreparation => deal_prep::render(frame, app, area),
        Page::Documents | Page::Account | Page::Settings => {
            render_placeholder(frame, app.page(), area)
        }
    }
}

/// Informational panel for pages without interactive content
fn render_placeholder(frame: &mut Frame, page: Page, area: Rect) {
    let body = match page {
        Page::Documents => "Upload and organize the documents buyers request during due diligence.",
        Page::Account => "Your login, contact details and notification preferences.",
        _ => "Portal preferences.",
    };

    let lines = vec![
        Line::from(Span::styled(page.title(), styles::title_style())),
        Line::from(""),
        Line::from(Span::raw(body)),
        Line::from(""),
        Line::from(Span::styled(
            "This section is not available in the terminal portal yet.",
            styles::muted_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );
    frame.render_widget(paragraph, area);
}

/// Key hints shown on the right of the status bar for the current page
fn page_hints(app: &App) -> &'static str {
    if app.focus == Focus::Menu {
        return "[↑↓] move | [Enter] open | [Tab] content";
    }
    match app.page() {
        Page::Dashboard => "[Tab] menu | [←→] panel | [Enter] open",
        Page::Offers => "[1-0] sort | [v]iew | [o]rder | [Enter] open",
        Page::OfferDetail => "[c]hat | [r]espond | [Esc] back",
        Page::Buyers => "[←→] category | [/] search | [b]rowse",
        Page::BrowseBuyers => "[t]ype | [s]ave | [c]ontact | [/] search",
        Page::Messages if app.messages.open_thread.is_some() => "[r]eply | [p]ublish | [Esc] close",
        Page::Messages => "[←→] tab | [/] search | [Enter] open",
        Page::DealRoom => "[←→] tab | [↑↓] scroll",
        Page::PracticeProfile => "[s]tatus | [v]iew as | [b]uyer visibility",
        Page::Team => "[a]dd | [e]dit | [x] delete",
        Page::Meetings => "[p]ast | [Enter] buyer",
        Page::Interest => "[Enter] buyer",
        Page::Financials => "[t] period | [c] compare | [m] target",
        Page::Facilities => "[←→] media | [↑↓] scroll",
        Page::Reviews => "[↑↓] scroll",
        Page::DealPreparation => "[←→] tab | [↑↓] scroll",
        _ => "[Esc] back",
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = match (&app.status_message, app.state) {
        (_, AppState::Searching) => {
            format!(" Search: {}▌ ", app.search_text().unwrap_or_default())
        }
        (Some(msg), _) => format!(" {} ", msg),
        (None, _) => match app.search_text() {
            Some(query) if !query.is_empty() => format!(" Filter: {} ", query),
            _ => format!(" {} ", app.store.practice.selling_status.label()),
        },
    };
    let right_text = format!(" {} | [q]uit ", page_hints(app));

    let left_style = if app.state == AppState::Searching {
        styles::search_style()
    } else {
        styles::muted_style()
    };

    let padding_len = (area.width as usize)
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(56, 35, frame.area());

    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  CareOwner", styles::title_style())),
        Line::from(Span::styled(format!("  version {}", version), styles::muted_style())),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("Tab", "Switch focus (menu ↔ content)"),
        help_line("↑/↓", "Move selection"),
        help_line("←/→", "Previous/next tab"),
        help_line("Enter", "Open / drill down"),
        help_line("Esc", "Go back"),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        help_line("/", "Search"),
        help_line("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(" Offers", styles::highlight_style())),
        help_line("1-0", "Sort by column (again to reverse)"),
        help_line("v", "Table / comparison view"),
        help_line("o", "Reorder offers"),
        help_line("c / r", "Ask the assistant / respond"),
        Line::from(""),
        Line::from(Span::styled(" Buyers & Messages", styles::highlight_style())),
        help_line("b", "Browse all buyers"),
        help_line("s / c", "Save / contact buyer"),
        help_line("r / p", "Reply / publish answer"),
        Line::from(""),
        Line::from(Span::styled(" Practice", styles::highlight_style())),
        help_line("s / v / b", "Status / view as / visibility"),
        help_line("a", "Add team member"),
        Line::from(""),
        Line::from(Span::styled(" Financials", styles::highlight_style())),
        help_line("t / c / m", "Period / compare / compare target"),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 7, frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .title(" CareOwner ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Bordered block used by the page renderers
pub fn panel(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused))
}

/// Horizontal tab strip: `title (count)` entries separated by bars
pub fn tab_line<'a>(tabs: impl IntoIterator<Item = (String, bool)>) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in tabs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let style = if selected {
            styles::tab_style(true)
        } else {
            styles::muted_style()
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}

/// "Label: value" detail line
pub fn field_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), styles::muted_style()),
        Span::raw(value.into()),
    ])
}

/// Section heading followed by bulleted items
pub fn bullet_section<'a>(lines: &mut Vec<Line<'a>>, heading: &'a str, items: &'a [String]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(heading, styles::highlight_style())));
    for item in items {
        lines.push(Line::from(format!("  • {}", item)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careowner_core::views::ProfileTab;
    use careowner_core::{Config, DataStore};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = App::new(Config::default(), DataStore::embedded().unwrap());
        for page in Page::ALL {
            app.navigate(page);
            let text = draw(&app);
            assert!(text.contains("CareOwner"), "{} missing title", page);
        }
    }

    #[test]
    fn test_missing_records_show_not_found() {
        let mut app = App::new(Config::default(), DataStore::embedded().unwrap());
        app.view_buyer("999");
        assert!(draw(&app).contains("Buyer Not Found"));
        app.view_offer("999");
        assert!(draw(&app).contains("Offer Not Found"));
    }

    #[test]
    fn test_detail_pages_render_seed_data() {
        let mut app = App::new(Config::default(), DataStore::embedded().unwrap());
        app.navigate(Page::Financials);
        let text = draw(&app);
        assert!(text.contains("$2.4M"));
        assert!(text.contains("Self-Reported"));

        app.navigate(Page::Facilities);
        assert!(draw(&app).contains("4800 sq ft"));

        app.navigate(Page::Reviews);
        assert!(draw(&app).contains("6 reviews"));

        app.navigate(Page::DealPreparation);
        assert!(draw(&app).contains("Ready to sell"));
    }

    #[test]
    fn test_profile_financials_tab_shows_figures() {
        let mut app = App::new(Config::default(), DataStore::embedded().unwrap());
        app.navigate(Page::PracticeProfile);
        app.profile.tab = ProfileTab::Financials;
        let text = draw(&app);
        assert!(text.contains("$624K"));
        assert!(!text.contains("Not connected yet"));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_fixed(40, 5, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 2);
    }
}
