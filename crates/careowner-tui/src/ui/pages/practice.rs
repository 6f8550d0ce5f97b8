use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use careowner_core::models::Practice;
use careowner_core::views::{settings_rows, MediaTab, ProfileTab, SettingsRow, Widget};

use super::{facilities, financials};
use crate::app::{App, Focus};
use crate::ui::render::{centered_rect_fixed, field_line, panel, tab_line};
use crate::ui::styles;

// ============================================================================
// Practice profile
// ============================================================================

pub fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.profile;
    let practice = &app.store.practice;

    let (main, settings) = if state.settings_cursor.is_some() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(34)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(5)])
        .split(main);

    let viewer = match state.previewed_buyer(&app.store.buyers) {
        Some(buyer) => format!("Previewing as {}", buyer.name),
        None => "Owner view".to_string(),
    };
    let header = vec![
        Line::from(vec![
            Span::styled(practice.business_name.as_str(), styles::title_style()),
            Span::raw("  "),
            Span::styled(practice.address.as_str(), styles::muted_style()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", styles::muted_style()),
            Span::styled(practice.selling_status.label(), styles::highlight_style()),
            Span::styled(format!("   {}", viewer), styles::muted_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(header).block(panel(String::new(), false)), chunks[0]);

    let tabs = state.tabs();
    if tabs.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "This buyer can't see any part of your profile.",
                styles::muted_style(),
            ))
            .block(panel(String::new(), false)),
            chunks[2],
        );
    } else {
        let strip = tabs.iter().map(|t| (t.title().to_string(), *t == state.tab));
        frame.render_widget(Paragraph::new(tab_line(strip)), chunks[1]);

        let lines = profile_lines(app, practice);
        let title = " [←→] tab [s]tatus [v]iew as [b] visibility ".to_string();
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((app.detail_scroll, 0))
                .block(panel(title, app.focus == Focus::Content && settings.is_none())),
            chunks[2],
        );
    }

    if let Some(area) = settings {
        render_visibility_settings(frame, app, area);
    }
}

fn profile_lines<'a>(app: &'a App, practice: &'a Practice) -> Vec<Line<'a>> {
    let state = &app.profile;
    let mut lines = Vec::new();
    let section = |lines: &mut Vec<Line<'a>>, widget: Widget, body: Vec<Line<'a>>| {
        if state.shows(widget) {
            lines.push(Line::from(Span::styled(widget.label(), styles::highlight_style())));
            lines.extend(body);
            lines.push(Line::from(""));
        }
    };

    match state.tab {
        ProfileTab::Overview => {
            section(
                &mut lines,
                Widget::GrowthScore,
                vec![
                    Line::from(Span::styled(
                        format!("  {}/100", practice.growth_score),
                        styles::title_style(),
                    )),
                    Line::from(format!("  {}", practice.growth_description)),
                ],
            );
            section(
                &mut lines,
                Widget::SellingStatus,
                vec![Line::from(format!("  {}", practice.selling_status.label()))],
            );
            section(
                &mut lines,
                Widget::ValuationRange,
                vec![Line::from(format!("  {}", practice.current_valuation))],
            );
            let rating = practice
                .average_review_rating()
                .map(|r| format!(" ({:.1} from reviews)", r))
                .unwrap_or_default();
            section(
                &mut lines,
                Widget::KeyMetrics,
                vec![
                    field_line("  Years:", practice.years_in_business.to_string()),
                    field_line("  Doctors:", practice.number_of_doctors.to_string()),
                    field_line("  Technicians:", practice.number_of_technicians.to_string()),
                    field_line("  Exam rooms:", practice.number_of_exam_rooms.to_string()),
                    field_line("  Google:", format!("{:.1}★{}", practice.google_rating, rating)),
                ],
            );
            section(
                &mut lines,
                Widget::Description,
                vec![
                    field_line("  Type:", practice.practice_type.clone()),
                    field_line("  Location:", practice.location_type.clone()),
                    field_line("  Hours:", practice.hours_of_operation.clone()),
                    field_line(
                        "  Website:",
                        practice.website.clone().unwrap_or_else(|| "-".to_string()),
                    ),
                ],
            );
            section(
                &mut lines,
                Widget::Highlights,
                practice
                    .services
                    .iter()
                    .map(|s| Line::from(format!("  • {}", s)))
                    .collect(),
            );
        }
        ProfileTab::Financials => {
            section(
                &mut lines,
                Widget::FinancialsValuation,
                vec![Line::from(format!("  {}", practice.current_valuation))],
            );
            let figures = &practice.financials;
            section(
                &mut lines,
                Widget::FinancialsMetrics,
                financials::metric_lines(figures, &app.financials),
            );
            section(&mut lines, Widget::FinancialsChart, financials::chart_lines(figures));
            section(
                &mut lines,
                Widget::FinancialsBreakdown,
                financials::breakdown_lines(figures),
            );
        }
        ProfileTab::Team => {
            section(
                &mut lines,
                Widget::TeamMembers,
                practice
                    .team
                    .iter()
                    .map(|d| Line::from(format!("  • {}, {}", d.name, d.title)))
                    .collect(),
            );
            section(
                &mut lines,
                Widget::TeamStructure,
                vec![
                    field_line("  Doctors:", practice.team.len().to_string()),
                    field_line("  Technicians:", practice.technicians.len().to_string()),
                ],
            );
        }
        ProfileTab::Facilities => {
            let building = &practice.building;
            section(&mut lines, Widget::FacilityDetails, facilities::detail_lines(practice));
            section(
                &mut lines,
                Widget::FacilityImages,
                facilities::media_lines(building, MediaTab::Photos),
            );
            section(&mut lines, Widget::Equipment, facilities::equipment_lines(building));
        }
        ProfileTab::Qa => {
            let answered: Vec<Line> = app
                .store
                .threads
                .iter()
                .filter(|t| t.is_question && t.is_answered)
                .flat_map(|t| {
                    [
                        Line::from(Span::styled(format!("Q: {}", t.subject), styles::highlight_style())),
                        Line::from(format!("A: {}", t.last_message)),
                        Line::from(""),
                    ]
                })
                .collect();
            if answered.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No published answers yet.",
                    styles::muted_style(),
                )));
            }
            lines.extend(answered);
        }
    }
    lines
}

fn render_visibility_settings(frame: &mut Frame, app: &App, area: Rect) {
    let visibility = &app.profile.visibility;
    let items: Vec<ListItem> = settings_rows()
        .into_iter()
        .map(|row| match row {
            SettingsRow::Section(section) => {
                let check = if visibility.all_visible(section) { "[x]" } else { "[ ]" };
                ListItem::new(Line::from(Span::styled(
                    format!("{} {}", check, section.title()),
                    styles::highlight_style(),
                )))
            }
            SettingsRow::Widget(widget) => {
                let check = if visibility.is_visible(widget) { "[x]" } else { "[ ]" };
                ListItem::new(Line::from(format!("   {} {}", check, widget.label())))
            }
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Buyer Visibility - [Space] toggle ".to_string(), true))
        .highlight_style(styles::selected_style());
    let mut state = ListState::default();
    state.select(app.profile.settings_cursor);
    frame.render_stateful_widget(list, area, &mut state);
}

// ============================================================================
// Team
// ============================================================================

pub fn render_team(frame: &mut Frame, app: &App, area: Rect) {
    let practice = &app.store.practice;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(practice.technicians.len() as u16 + 3)])
        .split(chunks[0]);

    let header = Row::new(["Name", "Title", "Age", "Years"])
        .style(styles::title_style())
        .height(1);
    let rows: Vec<Row> = practice
        .team
        .iter()
        .map(|doctor| {
            Row::new(vec![
                Cell::from(doctor.name.clone()),
                Cell::from(doctor.title.clone()),
                Cell::from(doctor.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())),
                Cell::from(doctor.years_experience.to_string()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(5),
        Constraint::Length(6),
    ];
    let title = format!(" Doctors ({}) - [a]dd [e]dit [x] delete ", practice.team.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(title, app.focus == Focus::Content))
        .row_highlight_style(styles::selected_style());
    let mut state = TableState::default();
    if !practice.team.is_empty() {
        state.select(Some(app.team.selection));
    }
    frame.render_stateful_widget(table, left[0], &mut state);

    let tech_rows: Vec<Row> = practice
        .technicians
        .iter()
        .map(|tech| {
            Row::new(vec![
                Cell::from(tech.name.clone()),
                Cell::from(tech.role.clone()),
                Cell::from(format!("${:.2}/hr", tech.hourly_salary)),
                Cell::from(format!("{}h", tech.hours_per_week)),
            ])
        })
        .collect();
    let tech_widths = [
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(11),
        Constraint::Length(5),
    ];
    frame.render_widget(
        Table::new(tech_rows, tech_widths).block(panel(
            format!(" Technicians ({}) ", practice.technicians.len()),
            false,
        )),
        left[1],
    );

    let detail = match practice.team.get(app.team.selection) {
        Some(doctor) => {
            let mut lines = vec![
                Line::from(Span::styled(doctor.name.as_str(), styles::title_style())),
                Line::from(Span::styled(doctor.title.as_str(), styles::muted_style())),
                Line::from(""),
                field_line("School:", doctor.school.clone()),
                field_line("License:", doctor.license.clone()),
                field_line("Experience:", format!("{} years", doctor.years_experience)),
                field_line("Complaints:", doctor.complaints.to_string()),
                Line::from(""),
                Line::from(doctor.bio.as_str()),
            ];
            if !doctor.professional_experience.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Professional Experience",
                    styles::highlight_style(),
                )));
                for entry in &doctor.professional_experience {
                    lines.push(Line::from(format!("  • {}", entry)));
                }
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "No team members yet. Press a to add one.",
            styles::muted_style(),
        ))],
    };
    frame.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .block(panel(String::new(), false)),
        chunks[1],
    );
}

pub fn render_member_form(frame: &mut Frame, app: &App) {
    let Some(ref form) = app.team.form else {
        return;
    };
    let fields = form.fields();
    let focused = app.team.focused_field();
    let height = (fields.len() as u16) * 2 + 8;
    let area = centered_rect_fixed(70, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for field in &fields {
        let is_focused = Some(*field) == focused;
        let label_style = if is_focused {
            styles::highlight_style()
        } else {
            styles::muted_style()
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));
        let mut value = vec![Span::raw(format!("  {}", form.text(*field)))];
        if is_focused {
            value.push(Span::styled("▌", styles::search_style()));
        }
        lines.push(Line::from(value));
    }

    lines.push(Line::from(""));
    let age = form.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string());
    let years = form
        .years_experience
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    lines.push(Line::from(vec![
        Span::styled("Age: ", styles::muted_style()),
        Span::raw(age),
        Span::styled("   Years of experience: ", styles::muted_style()),
        Span::raw(years),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Tab] ", styles::help_key_style()),
        Span::styled("next  ", styles::help_desc_style()),
        Span::styled("[^N/^D] ", styles::help_key_style()),
        Span::styled("add/remove experience  ", styles::help_desc_style()),
        Span::styled("[Enter] ", styles::help_key_style()),
        Span::styled("save  ", styles::help_desc_style()),
        Span::styled("[Esc] ", styles::help_key_style()),
        Span::styled("cancel", styles::help_desc_style()),
    ]));

    let paragraph = Paragraph::new(lines).block(panel(" Add Team Member ".to_string(), true));
    frame.render_widget(paragraph, area);
}

