use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use careowner_core::models::{
    employment_term, DealRoom, Party, QaStatus, RequestStatus, StepStatus, TaskStatus,
};
use careowner_core::utils::dates::{long_date, short_date};
use careowner_core::utils::format_currency;
use careowner_core::views::{
    pending_document_requests, pending_questions, progress_percent, tasks_by_status, DealRoomTab,
};

use crate::app::{App, Focus};
use crate::ui::render::{field_line, panel, tab_line};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let room = &app.store.deal_room;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Tabs
            Constraint::Min(5),
        ])
        .split(area);

    let percent = progress_percent(room);
    let completed = room
        .timeline
        .iter()
        .filter(|step| step.status == StepStatus::Complete)
        .count();
    let progress = Paragraph::new(Line::from(vec![
        Span::styled(format!("{:.0}% complete", percent), styles::success_style()),
        Span::styled(
            format!("  {} of {} steps done", completed, room.timeline.len()),
            styles::muted_style(),
        ),
    ]))
    .block(panel(
        format!(
            " {} · {} · closing {} ",
            room.buyer_name,
            format_currency(room.offer_amount),
            short_date(&room.estimated_closing_date)
        ),
        false,
    ));
    frame.render_widget(progress, chunks[0]);

    let pending_requests = pending_document_requests(room).len();
    let pending_qa = pending_questions(room).len();
    let tabs = DealRoomTab::ALL.map(|tab| {
        let label = match tab {
            DealRoomTab::Documents if pending_requests > 0 => {
                format!("{} ({})", tab.title(), pending_requests)
            }
            DealRoomTab::Qa if pending_qa > 0 => format!("{} ({})", tab.title(), pending_qa),
            _ => tab.title().to_string(),
        };
        (label, tab == app.deal_room.tab)
    });
    frame.render_widget(Paragraph::new(tab_line(tabs)), chunks[1]);

    let lines = match app.deal_room.tab {
        DealRoomTab::Overview => overview_lines(room),
        DealRoomTab::Tasks => task_lines(room),
        DealRoomTab::Documents => document_lines(room),
        DealRoomTab::Qa => qa_lines(room),
        DealRoomTab::DealDetails => detail_lines(room),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.deal_room.scroll, 0))
        .block(panel(
            format!(" {} - [←→] tab [↑↓] scroll ", app.deal_room.tab.title()),
            app.focus == Focus::Content,
        ));
    frame.render_widget(paragraph, chunks[2]);
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, styles::highlight_style()))
}

fn overview_lines(room: &DealRoom) -> Vec<Line<'_>> {
    let mut lines = vec![heading("Timeline")];
    for step in &room.timeline {
        let (marker, style) = match step.status {
            StepStatus::Complete => ("✓", styles::success_style()),
            StepStatus::InProgress => ("●", styles::highlight_style()),
            StepStatus::Pending => ("○", styles::muted_style()),
        };
        let mut spans = vec![
            Span::styled(format!("  {} ", marker), style),
            Span::styled(step.title.as_str(), style),
        ];
        if let Some(ref date) = step.date {
            spans.push(Span::styled(format!("  {}", date), styles::muted_style()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("     {}", step.description),
            styles::muted_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(heading("Participants"));
    for person in &room.access_list {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", person.initials), styles::highlight_style()),
            Span::raw(person.name.as_str()),
            Span::styled(format!("  {}", person.role), styles::muted_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(field_line("Status:", room.status.clone()));
    lines
}

fn task_lines(room: &DealRoom) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for status in TaskStatus::ALL {
        let tasks = tasks_by_status(room, status);
        lines.push(heading_owned(format!("{} ({})", status.label(), tasks.len())));
        for task in tasks {
            lines.push(Line::from(vec![
                Span::raw(format!("  • {}", task.title)),
                Span::styled(
                    format!("  {}", task.priority.label()),
                    styles::priority_style(task.priority),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "    {} · due {} · {}",
                    task.assigned_to,
                    short_date(&task.due_date),
                    task.description
                ),
                styles::muted_style(),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn heading_owned(text: String) -> Line<'static> {
    Line::from(Span::styled(text, styles::highlight_style()))
}

fn document_lines(room: &DealRoom) -> Vec<Line<'_>> {
    let pending = pending_document_requests(room);
    let mut lines = vec![heading_owned(format!("Requested Documents ({} pending)", pending.len()))];
    for request in &room.requested_documents {
        let (label, style) = match request.status {
            RequestStatus::Pending => ("Pending", styles::error_style()),
            RequestStatus::Uploaded => ("Uploaded", styles::success_style()),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  • {}", request.name)),
            Span::styled(format!("  {}", label), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} · requested by {} on {} · due {}",
                request.description,
                request.requested_by,
                short_date(&request.requested_date),
                short_date(&request.due_date)
            ),
            styles::muted_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(heading_owned(format!("Shared Documents ({})", room.documents.len())));
    for doc in &room.documents {
        let from = match doc.uploaded_by {
            Party::Buyer => "Buyer",
            Party::Seller => "Seller",
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  • {}", doc.name)),
            Span::styled(
                format!(
                    "  {} · {} · {} · {}",
                    doc.category,
                    doc.size,
                    from,
                    short_date(&doc.uploaded_date)
                ),
                styles::muted_style(),
            ),
        ]));
    }
    lines
}

fn qa_lines(room: &DealRoom) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for item in &room.qa {
        let (label, style) = match item.status {
            QaStatus::Pending => ("Awaiting answer", styles::error_style()),
            QaStatus::Answered => ("Answered", styles::success_style()),
        };
        lines.push(Line::from(vec![
            Span::styled("Q: ", styles::highlight_style()),
            Span::raw(item.question.as_str()),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} · {} · {}",
                item.asked_by,
                short_date(&item.asked_date),
                label
            ),
            style,
        )));
        if let Some(ref answer) = item.answer {
            lines.push(Line::from(vec![
                Span::styled("A: ", styles::success_style()),
                Span::raw(answer.as_str()),
            ]));
            if let Some(ref by) = item.answered_by {
                let when = item.answered_date.as_ref().map(short_date).unwrap_or_default();
                lines.push(Line::from(Span::styled(
                    format!("   {} {}", by, when),
                    styles::muted_style(),
                )));
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

fn detail_lines(room: &DealRoom) -> Vec<Line<'_>> {
    let details = &room.deal_details;
    vec![
        heading("Deal Details"),
        field_line("Total value:", format_currency(details.total_value)),
        field_line(
            "Cash at close:",
            format!("{} ({}%)", format_currency(details.cash_at_close), details.cash_percentage),
        ),
        field_line(
            "Earnout:",
            format!("{} ({}%)", format_currency(details.earnout_amount), details.earnout_percentage),
        ),
        field_line("Employment:", employment_term(details.employment_years)),
        field_line("Submitted:", long_date(&details.submitted_date)),
        field_line("Expires:", long_date(&details.expiration_date)),
        field_line("Est. closing:", long_date(&room.estimated_closing_date)),
    ]
}
