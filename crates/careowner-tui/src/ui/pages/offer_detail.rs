use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use careowner_core::models::{Offer, OfferDetail};
use careowner_core::utils::dates::{long_date, short_date};
use careowner_core::utils::format_currency;
use careowner_core::views::{ChatRole, ResponseChoice};

use crate::app::{App, AppState, Focus};
use crate::ui::render::{bullet_section, centered_rect_fixed, field_line, panel};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some((offer, detail)) = app.selected_offer() else {
        render_not_found(frame, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_offer(frame, app, offer, detail, chunks[0]);
    render_chat(frame, app, chunks[1]);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Offer Not Found", styles::error_style())),
        Line::from(""),
        Line::from(Span::styled(
            "The offer you're looking for doesn't exist. Press Esc to return to Offers.",
            styles::muted_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(panel(String::new(), false)),
        area,
    );
}

fn render_offer(frame: &mut Frame, app: &App, offer: &Offer, detail: &OfferDetail, area: Rect) {
    let focused = app.focus == Focus::Content && app.state != AppState::Composing;
    let terms = &detail.deal_terms;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(offer.buyer_name.clone(), styles::title_style()),
            Span::raw("  "),
            Span::styled(
                offer.buyer_type.label(),
                styles::buyer_type_style(offer.buyer_type),
            ),
            Span::raw("  "),
            Span::styled(offer.status.label(), styles::offer_status_style(offer.status)),
        ]),
        Line::from(""),
        field_line("Offer:", offer.amount_display()),
        field_line("Received:", long_date(&offer.received_date)),
        field_line("Expires:", long_date(&offer.expiration_date)),
        field_line("Buying:", format!("{}% of the practice", offer.percentage_buying)),
        field_line("Employment:", offer.employment_term()),
        Line::from(""),
        Line::from(Span::styled("Deal Terms", styles::highlight_style())),
        field_line(
            "Cash at close:",
            format!("{} ({}%)", format_currency(terms.cash_at_close), terms.cash_percentage),
        ),
        field_line(
            "Earnout:",
            format!("{} ({}%)", format_currency(terms.earnout_amount), terms.earnout_percentage),
        ),
        field_line("Total value:", format_currency(terms.total_value)),
        field_line("Structure:", terms.earnout_structure.clone()),
        field_line("Non-compete:", terms.competition_clause.clone()),
        field_line("Transition:", terms.transition_support.clone()),
    ];

    if !offer.incentives.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Incentives", styles::highlight_style())));
        for incentive in &offer.incentives {
            lines.push(Line::from(vec![
                Span::raw(format!("  • {}: ", incentive.kind)),
                Span::raw(incentive.description.clone()),
                Span::styled(format!(" ({})", incentive.value), styles::success_style()),
            ]));
        }
    }

    bullet_section(&mut lines, "Highlights", &offer.highlights);
    bullet_section(&mut lines, "Concerns", &offer.concerns);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Cover Letter", styles::highlight_style())));
    for (heading, body) in detail.cover_letter.sections() {
        if !heading.is_empty() {
            lines.push(Line::from(Span::styled(heading, styles::muted_style())));
        }
        lines.push(Line::from(body));
        lines.push(Line::from(""));
    }

    if !detail.documents.is_empty() {
        lines.push(Line::from(Span::styled("Documents", styles::highlight_style())));
        for doc in &detail.documents {
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", doc.name)),
                Span::styled(
                    format!("{} · {} · {}", doc.kind, doc.size, short_date(&doc.uploaded_date)),
                    styles::muted_style(),
                ),
            ]));
        }
    }

    let title = " Offer Details - [r]espond [↑↓] scroll ".to_string();
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(panel(title, focused));
    frame.render_widget(paragraph, area);
}

fn render_chat(frame: &mut Frame, app: &App, area: Rect) {
    let composing = app.state == AppState::Composing;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    if let Some(chat) = app.current_chat() {
        for message in &chat.messages {
            let (who, style) = match message.role {
                ChatRole::Assistant => ("Assistant", styles::success_style()),
                ChatRole::User => ("You", styles::highlight_style()),
            };
            lines.push(Line::from(Span::styled(who, style)));
            lines.push(Line::from(message.content.clone()));
            lines.push(Line::from(""));
        }
        if chat.is_thinking() {
            lines.push(Line::from(Span::styled("Assistant is typing…", styles::muted_style())));
        }
    }

    // Keep the newest messages in view
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let inner_width = chunks[0].width.saturating_sub(2).max(1) as usize;
    let wrapped: usize = lines
        .iter()
        .map(|l| (l.width() / inner_width) + 1)
        .sum();
    let scroll = wrapped.saturating_sub(inner_height) as u16;

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(panel(" Offer Assistant ".to_string(), false));
    frame.render_widget(transcript, chunks[0]);

    let input = app.current_chat().map(|c| c.input.as_str()).unwrap_or_default();
    let input_line = if composing {
        Line::from(vec![Span::raw(input.to_string()), Span::styled("▌", styles::search_style())])
    } else if input.is_empty() {
        Line::from(Span::styled("Press c to ask about this offer", styles::muted_style()))
    } else {
        Line::from(input.to_string())
    };
    frame.render_widget(
        Paragraph::new(input_line).block(panel(" Ask ".to_string(), composing)),
        chunks[1],
    );
}

pub fn render_response_overlay(frame: &mut Frame, app: &App) {
    let Some((offer, _)) = app.selected_offer() else {
        return;
    };
    let area = centered_rect_fixed(64, 14, frame.area());
    frame.render_widget(Clear, area);

    let choice = app.response.choice;
    let option = |c: ResponseChoice| {
        let marker = if c == choice { "(•) " } else { "( ) " };
        let style = if c == choice {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        Span::styled(format!("{}{}", marker, c.label()), style)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Respond to {}", offer.buyer_name),
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(vec![
            option(ResponseChoice::Interested),
            Span::raw("   "),
            option(ResponseChoice::NotInterested),
        ]),
        Line::from(Span::styled(choice.hint(), styles::muted_style())),
        Line::from(""),
        Line::from(Span::styled("Message:", styles::muted_style())),
        Line::from(vec![
            Span::raw(app.response.message.clone()),
            Span::styled("▌", styles::search_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Tab] ", styles::help_key_style()),
            Span::styled("choice  ", styles::help_desc_style()),
            Span::styled("[Enter] ", styles::help_key_style()),
            Span::styled("send  ", styles::help_desc_style()),
            Span::styled("[Esc] ", styles::help_key_style()),
            Span::styled("cancel", styles::help_desc_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" Respond to Offer ".to_string(), true));
    frame.render_widget(paragraph, area);
}
