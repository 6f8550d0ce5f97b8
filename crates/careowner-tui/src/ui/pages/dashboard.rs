use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use careowner_core::utils::dates::{clock_time, message_time, short_date};
use careowner_core::views::{total_unread, DashboardPanel, DashboardState, StatTiles};

use crate::app::{App, Focus};
use crate::ui::render::panel;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    render_tiles(frame, app, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    render_activity(frame, app, panels[0]);
    render_meetings(frame, app, panels[1]);
}

fn render_tiles(frame: &mut Frame, app: &App, area: Rect) {
    let tiles = StatTiles::from_store(&app.store);
    let unread = total_unread(&app.store.threads);
    let practice = &app.store.practice;

    let cells = [
        ("Current Offers", tiles.current_offers.to_string()),
        ("Interested Buyers", tiles.interested_buyers.to_string()),
        ("Recommendations", tiles.recommendations.to_string()),
        ("Unread Messages", unread.to_string()),
        ("Selling Status", practice.selling_status.label().to_string()),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, cells.len() as u32); 5])
        .split(area);

    for ((label, value), column) in cells.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(value, styles::title_style())),
            Line::from(Span::styled(label, styles::muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines).block(panel(String::new(), false)), *column);
    }
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content && app.dashboard.panel == DashboardPanel::Activity;
    let activities = DashboardState::recent_activities(&app.store.activities);

    let items: Vec<ListItem> = activities
        .iter()
        .map(|activity| {
            let marker = if activity.is_unread { "● " } else { "  " };
            let mut header = vec![
                Span::styled(marker, styles::highlight_style()),
                Span::styled(activity.title.clone(), styles::list_item_style()),
                Span::styled(
                    format!("  {}", message_time(&activity.timestamp)),
                    styles::muted_style(),
                ),
            ];
            if let Some(ref buyer) = activity.buyer_name {
                header.push(Span::styled(format!("  {}", buyer), styles::muted_style()));
            }
            ListItem::new(vec![
                Line::from(header),
                Line::from(Span::styled(
                    format!("    {}", activity.description),
                    styles::priority_style(activity.priority),
                )),
            ])
        })
        .collect();

    let title = format!(
        " Recent Activity ({} unread) ",
        DashboardState::unread_count(&app.store.activities)
    );
    let list = List::new(items)
        .block(panel(title, focused))
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    if app.dashboard.panel == DashboardPanel::Activity {
        state.select(Some(app.dashboard.selection));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_meetings(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content && app.dashboard.panel == DashboardPanel::Meetings;
    let meetings = DashboardState::upcoming(&app.store.meetings);

    let items: Vec<ListItem> = meetings
        .iter()
        .map(|meeting| {
            ListItem::new(vec![
                Line::from(Span::styled(meeting.buyer_name.clone(), styles::list_item_style())),
                Line::from(Span::styled(
                    format!(
                        "  {} · {} {} · {}",
                        meeting.meeting_type,
                        short_date(&meeting.date),
                        clock_time(&meeting.time),
                        meeting.status.label()
                    ),
                    styles::muted_style(),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Upcoming Meetings ".to_string(), focused))
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    if app.dashboard.panel == DashboardPanel::Meetings {
        state.select(Some(app.dashboard.selection));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
