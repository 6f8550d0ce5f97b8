use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};

use careowner_core::models::Offer;
use careowner_core::utils::dates::short_date;
use careowner_core::utils::format_millions;
use careowner_core::views::{OfferSortField, OfferTab, OfferViewMode};

use crate::app::{App, Focus};
use crate::ui::render::{centered_rect_fixed, panel, tab_line};
use crate::ui::styles;

/// Number key bound to each sort column, in `OfferSortField::ALL` order
pub const SORT_KEYS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

pub fn sort_field_for_key(c: char) -> Option<OfferSortField> {
    SORT_KEYS
        .iter()
        .position(|&k| k == c)
        .map(|i| OfferSortField::ALL[i])
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let state = &app.offers;
    let offers = &app.store.offers;
    let tabs = [OfferTab::All, OfferTab::Active, OfferTab::Past].map(|tab| {
        let label = match tab {
            OfferTab::Active => format!("{} ({})", tab.title(), state.active_count(offers)),
            _ => tab.title().to_string(),
        };
        (label, tab == state.tab)
    });
    frame.render_widget(Paragraph::new(tab_line(tabs)), chunks[0]);

    match state.view_mode {
        OfferViewMode::Table => render_table(frame, app, chunks[1]),
        OfferViewMode::Comparison => render_comparison(frame, app, chunks[1]),
    }
}

fn header_label(app: &App, field: OfferSortField, key: char) -> String {
    let state = &app.offers;
    let arrow = if !state.is_custom_ordered() && state.sort_field == field {
        state.direction.indicator()
    } else {
        ""
    };
    format!("{} {}{}", key, field.title(), arrow)
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content;
    let visible = app.offers.visible(&app.store.offers);

    let header = Row::new(
        OfferSortField::ALL
            .iter()
            .zip(SORT_KEYS)
            .map(|(&field, key)| Cell::from(header_label(app, field, key))),
    )
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|offer| {
            Row::new(vec![
                Cell::from(short_date(&offer.received_date)),
                Cell::from(offer.buyer_name.clone()),
                Cell::from(Span::styled(
                    offer.buyer_type.badge_group(),
                    styles::buyer_type_style(offer.buyer_type),
                )),
                Cell::from(offer.amount_display()),
                Cell::from(offer.day1_valuation_display()),
                Cell::from(offer.day1_cash_display()),
                Cell::from(format!("{}%", offer.percentage_buying)),
                Cell::from(offer.employment_term()),
                Cell::from(offer.incentives.len().to_string()),
                Cell::from(Span::styled(
                    offer.status.label(),
                    styles::offer_status_style(offer.status),
                )),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Length(13),
        Constraint::Length(15),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let order = if app.offers.is_custom_ordered() {
        "custom order".to_string()
    } else {
        format!("by {}", app.offers.sort_field.title().to_lowercase())
    };
    let title = format!(
        " {} ({}) {} - [1-0] sort [o]rder [v] compare ",
        app.offers.tab.title(),
        visible.len(),
        order
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(title, focused))
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    if !visible.is_empty() {
        state.select(Some(app.offers.selection));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Offers side by side, one column per offer in the current order
fn render_comparison(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content;
    let visible = app.offers.visible(&app.store.offers);

    type Metric = (&'static str, fn(&Offer) -> String);
    let metrics: [Metric; 10] = [
        ("Buyer type", |o| o.buyer_type.label().to_string()),
        ("Offer", |o| format_millions(o.offer_amount)),
        ("Day-1 value", |o| format_millions(o.day1_valuation)),
        ("Day-1 cash", |o| format_millions(o.day1_cash)),
        ("Cash share", |o| format!("{}%", o.cash_percent())),
        ("% buying", |o| format!("{}%", o.percentage_buying)),
        ("Employment", |o| o.employment_term()),
        ("Incentives", |o| o.incentives.len().to_string()),
        ("Expires", |o| short_date(&o.expiration_date)),
        ("Status", |o| o.status.label().to_string()),
    ];

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(visible.iter().map(|o| Cell::from(o.buyer_name.clone()))),
    )
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = metrics
        .iter()
        .map(|(label, value)| {
            Row::new(
                std::iter::once(Cell::from(Span::styled(*label, styles::muted_style())))
                    .chain(visible.iter().map(|o| Cell::from(value(o)))),
            )
        })
        .collect();

    let mut widths = vec![Constraint::Length(14)];
    widths.extend(visible.iter().map(|_| Constraint::Fill(1)));

    let title = format!(" Compare {} offers - [v] table ", visible.len());
    let table = Table::new(rows, widths).header(header).block(panel(title, focused));
    frame.render_widget(table, area);
}

pub fn render_reorder_overlay(frame: &mut Frame, app: &App) {
    let Some(ref draft) = app.offers.reorder else {
        return;
    };
    let height = draft.ids().len() as u16 + 6;
    let area = centered_rect_fixed(54, height, frame.area());
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(area);

    let items: Vec<ListItem> = draft
        .ids()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let (name, amount) = app
                .store
                .offer(id)
                .map(|o| (o.buyer_name.clone(), format_millions(o.offer_amount)))
                .unwrap_or_else(|| (id.clone(), String::new()));
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), styles::muted_style()),
                Span::raw(name),
                Span::styled(format!("  {}", amount), styles::muted_style()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Reorder Offers ".to_string(), true))
        .highlight_style(styles::selected_style());
    let mut state = ListState::default();
    state.select(Some(draft.cursor));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let hint = Line::from(vec![
        Span::styled(" [u/d] ", styles::help_key_style()),
        Span::styled("move  ", styles::help_desc_style()),
        Span::styled("[Enter] ", styles::help_key_style()),
        Span::styled("save  ", styles::help_desc_style()),
        Span::styled("[Esc] ", styles::help_key_style()),
        Span::styled("cancel", styles::help_desc_style()),
    ]);
    frame.render_widget(Paragraph::new(hint).style(styles::status_bar_style()), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_keys_cover_every_field() {
        assert_eq!(sort_field_for_key('1'), Some(OfferSortField::ReceivedDate));
        assert_eq!(sort_field_for_key('4'), Some(OfferSortField::OfferAmount));
        assert_eq!(sort_field_for_key('0'), Some(OfferSortField::Status));
        assert_eq!(sort_field_for_key('x'), None);
    }
}
