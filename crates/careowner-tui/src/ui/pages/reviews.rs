use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use careowner_core::views::{rating_distribution, share_percent, star_string};

use crate::app::{App, Focus};
use crate::ui::render::{bullet_section, panel};
use crate::ui::styles;

const DISTRIBUTION_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let practice = &app.store.practice;
    let reviews = &practice.reviews;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(30)])
        .split(area);

    // Rating overview
    let mut summary = vec![
        Line::from(vec![
            Span::styled(format!("{:.1} ", practice.google_rating), styles::title_style()),
            Span::styled(
                star_string(practice.google_rating.round() as u8),
                styles::highlight_style(),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} reviews", reviews.len()),
            styles::muted_style(),
        )),
        Line::from(""),
    ];
    for (stars, count) in rating_distribution(reviews) {
        let share = share_percent(count, reviews.len());
        let filled = (share / 100.0 * DISTRIBUTION_WIDTH as f64).round() as usize;
        summary.push(Line::from(vec![
            Span::styled(format!("{}★ ", stars), styles::muted_style()),
            Span::styled("█".repeat(filled), styles::highlight_style()),
            Span::styled(
                "░".repeat(DISTRIBUTION_WIDTH.saturating_sub(filled)),
                styles::muted_style(),
            ),
            Span::raw(format!(" {:>3.0}%", share)),
        ]));
    }
    bullet_section(&mut summary, "What clients like", &practice.review_summary.positive);
    bullet_section(&mut summary, "What clients mention", &practice.review_summary.negative);

    frame.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: false })
            .block(panel(" Overall Rating ".to_string(), false)),
        columns[0],
    );

    // Individual reviews
    let mut lines = Vec::new();
    if reviews.is_empty() {
        lines.push(Line::from(Span::styled("No reviews yet.", styles::muted_style())));
    }
    for review in reviews {
        lines.push(Line::from(vec![
            Span::styled(star_string(review.rating), styles::highlight_style()),
            Span::raw("  "),
            Span::styled(review.author.as_str(), styles::list_item_style()),
            Span::styled(format!("  {}", review.date), styles::muted_style()),
        ]));
        lines.push(Line::from(format!("  {}", review.text)));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(panel(
                format!(" Reviews ({}) - [↑↓] scroll ", reviews.len()),
                app.focus == Focus::Content,
            )),
        columns[1],
    );
}
