use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use careowner_core::models::Buyer;
use careowner_core::utils::dates::{long_date, short_date};
use careowner_core::views::{BrowseState, BuyerCategory, BuyerListState, BuyerMarks};

use crate::app::{App, Focus};
use crate::ui::render::{bullet_section, field_line, panel, tab_line};
use crate::ui::styles;

/// Saved and contacted markers shown next to a buyer's name
fn marks_label(marks: &BuyerMarks, id: &str) -> String {
    let saved = if marks.is_saved(id) { "★" } else { " " };
    let contacted = if marks.is_contacted(id) { "✉" } else { " " };
    format!("{}{}", saved, contacted)
}

fn score_cell(buyer: &Buyer) -> Cell<'static> {
    let score = buyer.overall_score();
    Cell::from(Span::styled(
        format!("{:.1}", score),
        styles::score_style(score.round() as u8),
    ))
}

// ============================================================================
// Buyers overview
// ============================================================================

pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let counts = BuyerListState::category_counts(&app.store.buyers, &app.buyer_marks);
    let tabs = counts.into_iter().map(|(category, count)| {
        (
            format!("{} ({})", category.title(), count),
            category == app.buyers.category,
        )
    });
    frame.render_widget(Paragraph::new(tab_line(tabs)), chunks[0]);

    let visible = app.buyers.visible(&app.store.buyers, &app.buyer_marks);
    let title = format!(
        " {} ({}) - [/] search [b]rowse all [Enter] profile ",
        app.buyers.category.title(),
        visible.len()
    );

    if visible.is_empty() {
        let message = if app.buyers.search.trim().is_empty() {
            app.buyers.category.empty_message()
        } else {
            "No buyers match your search."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, styles::muted_style())).block(panel(title, focused)),
            chunks[1],
        );
        return;
    }

    let header = Row::new(["", "Buyer", "Type", "Headquarters", "Status", "Score", "Last Contact"])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|buyer| {
            Row::new(vec![
                Cell::from(Span::styled(
                    marks_label(&app.buyer_marks, &buyer.id),
                    styles::highlight_style(),
                )),
                Cell::from(buyer.name.clone()),
                Cell::from(Span::styled(
                    buyer.buyer_type.label(),
                    styles::buyer_type_style(buyer.buyer_type),
                )),
                Cell::from(buyer.headquarters.clone()),
                Cell::from(buyer.status.label()),
                score_cell(buyer),
                Cell::from(short_date(&buyer.last_contact)),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Length(18),
        Constraint::Fill(1),
        Constraint::Length(17),
        Constraint::Length(6),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(title, focused))
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.buyers.selection));
    frame.render_stateful_widget(table, chunks[1], &mut state);
}

// ============================================================================
// Browse directory
// ============================================================================

pub fn render_browse(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let counts = BrowseState::type_counts(&app.store.buyers);
    let all = std::iter::once((
        format!("All ({})", app.store.buyers.len()),
        app.browse.type_filter.is_none(),
    ));
    let by_type = counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(t, count)| (format!("{} ({})", t.label(), count), app.browse.type_filter == Some(t)));
    frame.render_widget(Paragraph::new(tab_line(all.chain(by_type))), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let visible = app.browse.visible(&app.store.buyers);
    let title = format!(
        " Buyer Directory ({}) - [t]ype [/] search [s]ave [c]ontact ",
        visible.len()
    );

    let rows: Vec<Row> = visible
        .iter()
        .map(|buyer| {
            Row::new(vec![
                Cell::from(Span::styled(
                    marks_label(&app.buyer_marks, &buyer.id),
                    styles::highlight_style(),
                )),
                Cell::from(buyer.name.clone()),
                Cell::from(buyer.headquarters.clone()),
                Cell::from(buyer.total_acquisitions.to_string()),
            ])
        })
        .collect();

    let header = Row::new(["", "Buyer", "Headquarters", "Deals"])
        .style(styles::title_style())
        .height(1);
    let widths = [
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(title, focused))
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(app.browse.selection));
    }
    frame.render_stateful_widget(table, columns[0], &mut state);

    let summary = match app.browse.selected(&app.store.buyers) {
        Some(buyer) => buyer_summary(buyer),
        None => vec![Line::from(Span::styled(
            "No buyers match your filters.",
            styles::muted_style(),
        ))],
    };
    frame.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .block(panel(" Summary - [Enter] full profile ".to_string(), false)),
        columns[1],
    );
}

fn buyer_summary(buyer: &Buyer) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(buyer.name.as_str(), styles::title_style())),
        Line::from(Span::styled(
            buyer.buyer_type.label(),
            styles::buyer_type_style(buyer.buyer_type),
        )),
        Line::from(""),
        Line::from(buyer.description.as_str()),
        Line::from(""),
        field_line("Founded:", buyer.founded.clone()),
        field_line("Investment:", buyer.investment_range.clone()),
        field_line("Deal style:", buyer.preferred_deal_structure.clone()),
    ]
}

// ============================================================================
// Buyer profile
// ============================================================================

pub fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let Some(buyer) = app.selected_buyer() else {
        let lines = vec![
            Line::from(Span::styled("Buyer Not Found", styles::error_style())),
            Line::from(""),
            Line::from(Span::styled(
                "The buyer you're looking for doesn't exist. Press Esc to return to Buyers.",
                styles::muted_style(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(panel(String::new(), false)),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(buyer.name.as_str(), styles::title_style()),
            Span::raw("  "),
            Span::styled(buyer.status.label(), styles::highlight_style()),
        ]),
        Line::from(Span::styled(
            buyer.buyer_type.label(),
            styles::buyer_type_style(buyer.buyer_type),
        )),
        Line::from(""),
        Line::from(buyer.description.as_str()),
        Line::from(""),
        field_line("Headquarters:", buyer.headquarters.clone()),
        field_line("Founded:", buyer.founded.clone()),
        field_line("Website:", buyer.website.clone().unwrap_or_else(|| "-".to_string())),
        field_line("Acquisitions:", buyer.total_acquisitions.to_string()),
        field_line("Investment:", buyer.investment_range.clone()),
        field_line("Deal style:", buyer.preferred_deal_structure.clone()),
        field_line("After close:", buyer.post_acquisition_model.clone()),
        field_line("Last contact:", long_date(&buyer.last_contact)),
    ];
    bullet_section(&mut lines, "Recent Acquisitions", &buyer.recent_acquisitions);
    bullet_section(&mut lines, "Strengths", &buyer.strengths);
    bullet_section(&mut lines, "Considerations", &buyer.considerations);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(panel(" Buyer Profile - [↑↓] scroll [Esc] back ".to_string(), true));
    frame.render_widget(paragraph, columns[0]);

    let mut side = vec![Line::from(Span::styled("Scores", styles::highlight_style()))];
    for (label, score) in [
        ("Culture fit", buyer.culture_fit),
        ("Financial strength", buyer.financial_strength),
        ("Track record", buyer.track_record),
    ] {
        side.push(Line::from(vec![
            Span::styled(format!("  {:<20}", label), styles::muted_style()),
            Span::styled(format!("{}/10", score), styles::score_style(score)),
        ]));
    }
    side.push(Line::from(vec![
        Span::styled(format!("  {:<20}", "Overall"), styles::muted_style()),
        Span::styled(format!("{:.1}", buyer.overall_score()), styles::title_style()),
    ]));

    side.push(Line::from(""));
    side.push(Line::from(Span::styled("Key Contacts", styles::highlight_style())));
    for contact in &buyer.key_contacts {
        side.push(Line::from(format!("  {} - {}", contact.name, contact.title)));
        side.push(Line::from(Span::styled(
            format!("    {} · {}", contact.email, contact.phone),
            styles::muted_style(),
        )));
    }

    let offers = app.store.offers_from(&buyer.id);
    side.push(Line::from(""));
    side.push(Line::from(Span::styled("Offers", styles::highlight_style())));
    if offers.is_empty() {
        side.push(Line::from(Span::styled("  No offers yet", styles::muted_style())));
    }
    for offer in offers {
        side.push(Line::from(vec![
            Span::raw(format!("  {} ", offer.amount_display())),
            Span::styled(offer.status.label(), styles::offer_status_style(offer.status)),
            Span::styled(
                format!("  {}", short_date(&offer.received_date)),
                styles::muted_style(),
            ),
        ]));
    }

    frame.render_widget(
        Paragraph::new(side)
            .wrap(Wrap { trim: false })
            .block(panel(String::new(), false)),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marks_label() {
        let mut marks = BuyerMarks::default();
        assert_eq!(marks_label(&marks, "1"), "  ");
        marks.toggle_saved("1");
        marks.mark_contacted("1");
        assert_eq!(marks_label(&marks, "1"), "★✉");
    }

    #[test]
    fn test_every_category_has_empty_message() {
        for category in BuyerCategory::ALL {
            assert!(!category.empty_message().is_empty());
        }
    }
}
