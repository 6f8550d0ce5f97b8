//! Buyer engagement pages: interest requests, meetings and recommendations.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use careowner_core::models::{InterestRequest, InterestStatus, Meeting, MeetingStatus};
use careowner_core::utils::dates::{clock_time, long_date, short_date};
use careowner_core::views::{active_interests, status_counts, MeetingsState};

use crate::app::{App, Focus};
use crate::ui::render::{bullet_section, field_line, panel};
use crate::ui::styles;

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area)
}

fn interest_status_style(status: InterestStatus) -> ratatui::style::Style {
    match status {
        InterestStatus::Pending => styles::highlight_style(),
        InterestStatus::Responded => styles::list_item_style(),
        InterestStatus::ScheduledMeeting => styles::success_style(),
        InterestStatus::Declined => styles::muted_style(),
    }
}

// ============================================================================
// Interest
// ============================================================================

pub fn render_interest(frame: &mut Frame, app: &App, area: Rect) {
    let interests = &app.store.interests;
    let entries = app.interest.entries(interests);
    let active = active_interests(interests).len();
    let columns = split(area);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .flat_map(|(i, interest)| {
            let mut items = Vec::new();
            if i == active {
                items.push(ListItem::new(Line::from(Span::styled(
                    "── Declined ──",
                    styles::muted_style(),
                ))));
            }
            items.push(ListItem::new(vec![
                Line::from(vec![
                    Span::styled(interest.buyer_name.clone(), styles::list_item_style()),
                    Span::styled(
                        format!("  {}", interest.status.label()),
                        interest_status_style(interest.status),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · {} · {} urgency",
                        interest.buyer_type.label(),
                        short_date(&interest.submitted_date),
                        interest.urgency_label()
                    ),
                    styles::muted_style(),
                )),
            ]));
            items
        })
        .collect();

    let counts = status_counts(interests)
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(s, n)| format!("{} {}", n, s.label().to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ");
    let title = format!(" Interested Buyers ({}) - {} ", active, counts);

    // The divider row shifts every declined entry down by one
    let row = if app.interest.selection >= active && active < entries.len() {
        app.interest.selection + 1
    } else {
        app.interest.selection
    };
    let list = List::new(items)
        .block(panel(title, app.focus == Focus::Content))
        .highlight_style(styles::selected_style());
    let mut state = ListState::default();
    if !entries.is_empty() {
        state.select(Some(row));
    }
    frame.render_stateful_widget(list, columns[0], &mut state);

    let detail = match app.interest.selected(interests) {
        Some(interest) => interest_lines(interest),
        None => vec![Line::from(Span::styled(
            "No interest requests yet.",
            styles::muted_style(),
        ))],
    };
    frame.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(panel(" Request - [Enter] buyer profile ".to_string(), false)),
        columns[1],
    );
}

fn interest_lines(interest: &InterestRequest) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(interest.buyer_name.as_str(), styles::title_style())),
        Line::from(Span::styled(
            format!("Submitted {}", long_date(&interest.submitted_date)),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(interest.personal_message.as_str()),
    ];
    bullet_section(&mut lines, "What They Like", &interest.what_they_like);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Why Engage", styles::highlight_style())));
    lines.push(Line::from(interest.why_engage.as_str()));
    bullet_section(&mut lines, "Their Questions", &interest.questions);
    lines.push(Line::from(""));
    lines.push(field_line("Meeting:", interest.preferred_meeting_type.clone()));
    lines.push(field_line("Timeline:", interest.timeline.clone()));
    lines
}

// ============================================================================
// Meetings
// ============================================================================

pub fn render_meetings(frame: &mut Frame, app: &App, area: Rect) {
    let meetings = &app.store.meetings;
    let visible = app.meetings.visible(meetings);
    let columns = split(area);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|meeting| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(meeting.buyer_name.clone(), styles::list_item_style()),
                    Span::styled(
                        format!("  {}", meeting.status.label()),
                        meeting_status_style(meeting.status),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · {} {} · {}",
                        meeting.meeting_type,
                        short_date(&meeting.date),
                        clock_time(&meeting.time),
                        meeting.duration
                    ),
                    styles::muted_style(),
                )),
            ])
        })
        .collect();

    let heading = if app.meetings.show_past { "Past" } else { "Upcoming" };
    let title = format!(
        " {} ({}) - {} confirmed, {} site visits - [p] toggle ",
        heading,
        visible.len(),
        MeetingsState::status_count(meetings, MeetingStatus::Confirmed),
        MeetingsState::site_visit_count(meetings)
    );

    if items.is_empty() {
        let message = if app.meetings.show_past {
            "No past meetings."
        } else {
            "No upcoming meetings."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, styles::muted_style()))
                .block(panel(title, app.focus == Focus::Content)),
            columns[0],
        );
    } else {
        let list = List::new(items)
            .block(panel(title, app.focus == Focus::Content))
            .highlight_style(styles::selected_style());
        let mut state = ListState::default();
        state.select(Some(app.meetings.selection));
        frame.render_stateful_widget(list, columns[0], &mut state);
    }

    let detail = app
        .meetings
        .selected(meetings)
        .map(meeting_lines)
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .block(panel(" Meeting - [Enter] buyer profile ".to_string(), false)),
        columns[1],
    );
}

fn meeting_status_style(status: MeetingStatus) -> ratatui::style::Style {
    match status {
        MeetingStatus::Confirmed | MeetingStatus::Completed => styles::success_style(),
        MeetingStatus::Scheduled => styles::list_item_style(),
        MeetingStatus::PendingConfirmation => styles::highlight_style(),
        MeetingStatus::Cancelled => styles::error_style(),
    }
}

fn meeting_lines(meeting: &Meeting) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(meeting.meeting_type.as_str(), styles::title_style())),
        Line::from(vec![
            Span::raw(meeting.buyer_name.as_str()),
            Span::styled(
                format!("  {}", meeting.buyer_type.label()),
                styles::buyer_type_style(meeting.buyer_type),
            ),
        ]),
        Line::from(""),
        field_line("When:", format!("{} at {}", long_date(&meeting.date), clock_time(&meeting.time))),
        field_line("Duration:", meeting.duration.clone()),
        field_line("Status:", meeting.status.label()),
    ];
    if let Some(ref location) = meeting.location {
        lines.push(field_line("Location:", location.clone()));
    }
    if let Some(ref link) = meeting.meeting_link {
        lines.push(field_line("Link:", link.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Agenda", styles::highlight_style())));
    lines.push(Line::from(meeting.agenda.as_str()));
    bullet_section(&mut lines, "Attendees", &meeting.attendees);
    if let Some(ref notes) = meeting.notes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Notes", styles::highlight_style())));
        lines.push(Line::from(notes.as_str()));
    }
    lines
}

// ============================================================================
// Recommendations
// ============================================================================

pub fn render_recommendations(frame: &mut Frame, app: &App, area: Rect) {
    let recommendations = &app.store.recommendations;
    let items: Vec<ListItem> = recommendations
        .iter()
        .map(|rec| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(rec.title.clone(), styles::title_style()),
                    Span::styled(
                        format!("  +{}", rec.potential_value_increase),
                        styles::success_style(),
                    ),
                ]),
                Line::from(format!("  {}", rec.description)),
                Line::from(Span::styled(
                    format!(
                        "  {} · impact {} · effort {} · {}",
                        rec.category, rec.impact, rec.effort, rec.status
                    ),
                    styles::muted_style(),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel(
            format!(" Value Recommendations ({}) ", recommendations.len()),
            app.focus == Focus::Content,
        ))
        .highlight_style(styles::selected_style());
    let mut state = ListState::default();
    if !recommendations.is_empty() {
        state.select(Some(app.recommendation_selection));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
