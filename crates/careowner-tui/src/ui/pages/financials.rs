use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use careowner_core::models::{BreakdownItem, Financials, Practice};
use careowner_core::views::{bar_length, chart_max, FinancialsState, MetricKey};

use crate::app::{App, Focus};
use crate::ui::render::panel;
use crate::ui::styles;

/// Cells used by the widest bar in the monthly chart
const CHART_WIDTH: usize = 32;

/// Cells used by a 100% breakdown bar
const BREAKDOWN_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let practice = &app.store.practice;
    let financials = &practice.financials;
    let state = &app.financials;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let compare = if state.compare_enabled {
        state.compare_to.label()
    } else {
        "off"
    };
    let header = vec![
        Line::from(vec![
            Span::styled("Period: ", styles::muted_style()),
            Span::styled(state.period.label(), styles::highlight_style()),
            Span::styled("   Compare to: ", styles::muted_style()),
            Span::styled(compare, styles::highlight_style()),
            Span::styled(
                format!("   Last updated: {}", financials.last_updated),
                styles::muted_style(),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} accounts connected: {}",
                financials.connected_accounts.len(),
                financials.connected_accounts.join(", ")
            ),
            styles::muted_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).block(panel(
            " Financials - [t] period [c] compare on/off [m] compare target ".to_string(),
            false,
        )),
        chunks[0],
    );

    let mut lines = health_lines(practice);
    lines.push(Line::from(""));
    lines.push(heading("Financial Metrics"));
    lines.extend(metric_lines(financials, state));
    lines.push(Line::from(""));
    lines.push(heading("Monthly Financial Performance"));
    lines.extend(chart_lines(financials));
    lines.push(Line::from(""));
    lines.extend(breakdown_lines(financials));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Verified figures come from connected accounting software. Self-reported figures \
         should be checked during due diligence.",
        styles::muted_style(),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(panel(" [↑↓] scroll ".to_string(), app.focus == Focus::Content)),
        chunks[1],
    );
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, styles::highlight_style()))
}

/// Growth score and deal appeal with the criteria behind it
fn health_lines(practice: &Practice) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Financial Health"),
        Line::from(vec![
            Span::styled("  Growth score  ", styles::muted_style()),
            Span::styled(format!("{}/100", practice.growth_score), styles::success_style()),
            Span::styled("   Deal appeal  ", styles::muted_style()),
            Span::styled(format!("{}/100", practice.deal_match_score), styles::title_style()),
        ]),
        Line::from(format!("  {}", practice.growth_description)),
    ];
    for criterion in &practice.deal_match_criteria {
        let (marker, style) = if criterion.is_positive {
            ("+", styles::success_style())
        } else {
            ("-", styles::error_style())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), style),
            Span::raw(criterion.text.clone()),
        ]));
    }
    lines
}

/// Headline figures, each with its verification badge and comparison
pub fn metric_lines(financials: &Financials, state: &FinancialsState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for key in MetricKey::ALL {
        let metric = key.metric(financials);
        let mut spans = vec![
            Span::styled(format!("  {:<26}", key.title()), styles::muted_style()),
            Span::styled(format!("{:<10}", metric.value), styles::title_style()),
        ];
        if let Some(change) = state.comparison(key) {
            let (arrow, style) = if change >= 0.0 {
                ("▲", styles::success_style())
            } else {
                ("▼", styles::error_style())
            };
            spans.push(Span::styled(format!("{} {:.1}%  ", arrow, change.abs()), style));
        }
        spans.push(if metric.verified {
            Span::styled("Verified", styles::success_style())
        } else {
            Span::styled("Self-Reported", styles::highlight_style())
        });
        lines.push(Line::from(spans));
    }
    lines
}

/// Monthly revenue and expenses as horizontal bars, projections hollow
pub fn chart_lines(financials: &Financials) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let max = chart_max(&financials.monthly);
    if max == 0 {
        lines.push(Line::from(Span::styled(
            "  No monthly figures reported.",
            styles::muted_style(),
        )));
        return lines;
    }

    for month in &financials.monthly {
        let fill = if month.projected { "░" } else { "█" };
        let revenue = fill.repeat(bar_length(month.revenue, max, CHART_WIDTH));
        let expenses = fill.repeat(bar_length(month.expenses, max, CHART_WIDTH));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<4}", month.month), styles::muted_style()),
            Span::styled(format!("{:<width$}", revenue, width = CHART_WIDTH), styles::success_style()),
            Span::raw(format!(" {:>4}k", month.revenue / 1000)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("      "),
            Span::styled(format!("{:<width$}", expenses, width = CHART_WIDTH), styles::error_style()),
            Span::styled(format!(" {:>4}k", month.expenses / 1000), styles::muted_style()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "  █ actual  ░ projected   green revenue, red expenses",
        styles::muted_style(),
    )));
    lines
}

fn breakdown_section(title: &'static str, items: &[BreakdownItem]) -> Vec<Line<'static>> {
    let mut lines = vec![heading(title)];
    for item in items {
        let bar = "█".repeat(bar_length(item.percent as u64, 100, BREAKDOWN_WIDTH));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<26}", item.label), styles::list_item_style()),
            Span::styled(format!("{:<width$}", bar, width = BREAKDOWN_WIDTH), styles::success_style()),
            Span::raw(format!(" {:>3}%", item.percent)),
        ]));
    }
    lines
}

/// Revenue and expense shares over the last twelve months
pub fn breakdown_lines(financials: &Financials) -> Vec<Line<'static>> {
    let mut lines = breakdown_section("Revenue Breakdown (Last 12 mo)", &financials.revenue_breakdown);
    lines.push(Line::from(""));
    lines.extend(breakdown_section(
        "Expenses Breakdown (Last 12 mo)",
        &financials.expense_breakdown,
    ));
    lines
}
