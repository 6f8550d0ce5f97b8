use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use careowner_core::models::DealPreparation;
use careowner_core::views::{grade_counts, high_interest, DealPrepTab};

use crate::app::{App, Focus};
use crate::ui::render::{bullet_section, field_line, panel, tab_line};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let prep = &app.store.deal_preparation;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let strip = DealPrepTab::ALL
        .map(|t| (t.title().to_string(), t == app.deal_prep_tab));
    frame.render_widget(Paragraph::new(tab_line(strip)), chunks[0]);

    let lines = match app.deal_prep_tab {
        DealPrepTab::Selling => selling_lines(prep),
        DealPrepTab::BuyerPreferences => preference_lines(prep),
        DealPrepTab::MarketCheck => market_check_lines(prep),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(panel(
                " Deal Preparation - [←→] tab [↑↓] scroll ".to_string(),
                app.focus == Focus::Content,
            )),
        chunks[1],
    );
}

fn selling_lines(prep: &DealPreparation) -> Vec<Line<'_>> {
    let (status, style) = if prep.ready_to_sell {
        ("Ready to sell", styles::success_style())
    } else {
        ("Not ready yet", styles::highlight_style())
    };
    let mut lines = vec![
        Line::from(Span::styled(status, style)),
        Line::from(prep.readiness_summary.as_str()),
        Line::from(""),
    ];

    let mut tally = vec![Span::styled("Grades: ", styles::muted_style())];
    for (grade, count) in grade_counts(prep) {
        tally.push(Span::styled(
            format!("{} × {}   ", grade.label(), count),
            styles::grade_style(grade),
        ));
    }
    lines.push(Line::from(tally));
    lines.push(Line::from(""));

    for metric in &prep.readiness {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", metric.grade.label()), styles::grade_style(metric.grade)),
            Span::styled(metric.title.as_str(), styles::list_item_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", metric.description),
            styles::muted_style(),
        )));
    }
    lines
}

fn preference_lines(prep: &DealPreparation) -> Vec<Line<'_>> {
    let prefs = &prep.preferences;
    let mut lines = vec![Line::from(Span::styled("Buyer Types", styles::highlight_style()))];
    for buyer_type in &prefs.buyer_types {
        let (mark, style) = if buyer_type.preferred {
            ("[x]", styles::success_style())
        } else {
            ("[ ]", styles::muted_style())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", mark), style),
            Span::raw(buyer_type.label.as_str()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(field_line("Geographic:", prefs.geographic.clone()));
    lines.push(field_line("Transition:", prefs.transition.clone()));
    lines.push(field_line("Target close:", prefs.target_close.clone()));
    lines.push(field_line("Support:", prefs.transition_support.clone()));
    bullet_section(&mut lines, "Deal Structure", &prefs.deal_structure);
    bullet_section(&mut lines, "Core Values", &prefs.core_values);
    lines
}

fn market_check_lines(prep: &DealPreparation) -> Vec<Line<'_>> {
    let summary = &prep.market_summary;
    let hot = high_interest(prep).len();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Estimated valuation: ", styles::muted_style()),
            Span::styled(summary.valuation_range.as_str(), styles::title_style()),
        ]),
        Line::from(Span::styled(
            format!(
                "{} responses, {} with high interest",
                prep.market_check.len(),
                hot
            ),
            styles::muted_style(),
        )),
    ];
    bullet_section(&mut lines, "Recommendations", &summary.recommendations);
    lines.push(Line::from(""));

    for response in &prep.market_check {
        lines.push(Line::from(vec![
            Span::styled(response.buyer_type.as_str(), styles::list_item_style()),
            Span::styled(format!("  {}  ", response.offer_range), styles::title_style()),
            Span::styled(
                format!("{} interest", response.interest.label()),
                styles::interest_style(response.interest),
            ),
        ]));
        lines.push(Line::from(format!("  {}", response.feedback)));
        for tip in &response.recommendations {
            lines.push(Line::from(Span::styled(format!("  • {}", tip), styles::muted_style())));
        }
        lines.push(Line::from(""));
    }
    lines
}
