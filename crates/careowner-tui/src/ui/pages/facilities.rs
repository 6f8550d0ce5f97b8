use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use careowner_core::models::{Building, Ownership, Practice};
use careowner_core::views::{exam_room_capacity, MediaTab};

use crate::app::{App, Focus};
use crate::ui::render::{field_line, panel, tab_line};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let practice = &app.store.practice;
    let building = &practice.building;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut lines = detail_lines(practice);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Equipment On-Site ({})", building.equipment.len()),
        styles::highlight_style(),
    )));
    lines.extend(equipment_lines(building));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "On-Site Services Available",
        styles::highlight_style(),
    )));
    for service in &building.services_offered {
        lines.push(Line::from(format!("  • {}", service)));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(panel(" Facilities - [↑↓] scroll ".to_string(), app.focus == Focus::Content)),
        columns[0],
    );

    let media = columns[1];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(media);
    let tab = app.facilities.media_tab;
    let strip = MediaTab::ALL.map(|t| {
        (format!("{} ({})", t.title(), t.files(building).len()), t == tab)
    });
    frame.render_widget(Paragraph::new(tab_line(strip)), chunks[0]);
    frame.render_widget(
        Paragraph::new(media_lines(building, tab))
            .block(panel(" Media - [←→] tab ".to_string(), false)),
        chunks[1],
    );
}

/// Property facts: size, ownership, rooms and address
pub fn detail_lines(practice: &Practice) -> Vec<Line<'static>> {
    let building = &practice.building;
    let ownership_style = match building.ownership {
        Ownership::Owned => styles::success_style(),
        Ownership::Leased => styles::highlight_style(),
    };
    vec![
        field_line("  Size:", format!("{} sq ft", building.size_sq_ft)),
        Line::from(vec![
            Span::styled(format!("{:<14}", "  Ownership:"), styles::muted_style()),
            Span::styled(building.ownership.label(), ownership_style),
        ]),
        field_line(
            "Exam rooms:",
            format!(
                "{} (+{} possible, {} total)",
                building.exam_rooms,
                building.additional_exam_rooms,
                exam_room_capacity(building)
            ),
        ),
        field_line("  Location:", practice.location_type.clone()),
        field_line("  Address:", practice.address.clone()),
    ]
}

pub fn equipment_lines(building: &Building) -> Vec<Line<'static>> {
    building
        .equipment
        .iter()
        .map(|item| Line::from(format!("  • {}", item)))
        .collect()
}

/// Files shared under one media tab, or the empty-tab message
pub fn media_lines(building: &Building, tab: MediaTab) -> Vec<Line<'static>> {
    let files = tab.files(building);
    if files.is_empty() {
        return vec![Line::from(Span::styled(
            format!("  {}", tab.empty_message()),
            styles::muted_style(),
        ))];
    }
    files
        .iter()
        .enumerate()
        .map(|(i, file)| Line::from(format!("  {}. {}", i + 1, file)))
        .collect()
}
