use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use careowner_core::models::MessageThread;
use careowner_core::utils::dates::{message_time, relative_time};
use careowner_core::utils::{initials, truncate_string};
use careowner_core::views::{total_unread, MessagesState};

use crate::app::{App, AppState, Focus};
use crate::ui::render::{panel, tab_line};
use crate::ui::styles;

const PREVIEW_LENGTH: usize = 48;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let counts = MessagesState::tab_counts(&app.store.threads);
    let tabs = counts.into_iter().map(|(tab, count)| {
        (format!("{} ({})", tab.title(), count), tab == app.messages.tab)
    });
    frame.render_widget(Paragraph::new(tab_line(tabs)), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(chunks[1]);

    render_thread_list(frame, app, columns[0]);
    render_conversation(frame, app, columns[1]);
}

fn render_thread_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content && app.messages.open_thread.is_none();
    let visible = app.messages.visible(&app.store.threads);
    let now = Local::now().naive_local();

    let items: Vec<ListItem> = visible
        .iter()
        .map(|thread| {
            let name_style = if thread.unread_count > 0 {
                styles::title_style()
            } else {
                styles::list_item_style()
            };
            let mut header = vec![
                Span::styled(thread.participant_name.clone(), name_style),
                Span::styled(
                    format!("  {}", relative_time(&thread.last_message_time, &now)),
                    styles::muted_style(),
                ),
            ];
            if thread.unread_count > 0 {
                header.push(Span::styled(
                    format!("  ({})", thread.unread_count),
                    styles::highlight_style(),
                ));
            }
            if thread.is_question {
                let (label, style) = if thread.is_answered {
                    ("  answered", styles::success_style())
                } else {
                    ("  unanswered", styles::error_style())
                };
                header.push(Span::styled(label, style));
            }
            ListItem::new(vec![
                Line::from(header),
                Line::from(Span::styled(
                    format!("  {}", thread.subject),
                    styles::list_item_style(),
                )),
                Line::from(Span::styled(
                    format!("  {}", truncate_string(&thread.last_message, PREVIEW_LENGTH)),
                    styles::muted_style(),
                )),
            ])
        })
        .collect();

    let title = format!(
        " Messages ({} unread) - [/] search [Enter] open ",
        total_unread(&app.store.threads)
    );

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No conversations found.", styles::muted_style()))
                .block(panel(title, focused)),
            area,
        );
        return;
    }

    let list = List::new(items)
        .block(panel(title, focused))
        .highlight_style(styles::selected_style());
    let mut state = ListState::default();
    state.select(Some(app.messages.selection));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_conversation(frame: &mut Frame, app: &App, area: Rect) {
    let thread = app
        .messages
        .open_thread
        .as_deref()
        .and_then(|id| app.store.thread(id));

    let Some(thread) = thread else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Select a conversation to read it.",
                styles::muted_style(),
            ))
            .block(panel(String::new(), false)),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(area);

    render_transcript(frame, app, thread, chunks[0]);
    render_composer(frame, app, thread, chunks[1]);
}

fn render_transcript(frame: &mut Frame, app: &App, thread: &MessageThread, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(thread.subject.as_str(), styles::title_style())),
        Line::from(Span::styled(
            format!("{} · {} · {}", thread.participant_name, thread.participant_role, thread.kind.label()),
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    for message in &thread.messages {
        let style = if message.is_from_owner() {
            styles::success_style()
        } else {
            styles::highlight_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", initials(&message.sender_name)), style),
            Span::styled(message.sender_name.as_str(), style),
            Span::styled(
                format!("  {}", message_time(&message.timestamp)),
                styles::muted_style(),
            ),
        ]));
        lines.push(Line::from(message.content.as_str()));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(panel(" Conversation - [↑↓] scroll [Esc] close ".to_string(), app.focus == Focus::Content));
    frame.render_widget(paragraph, area);
}

fn render_composer(frame: &mut Frame, app: &App, thread: &MessageThread, area: Rect) {
    let composing = app.state == AppState::Composing;

    let reply = if composing {
        Line::from(vec![
            Span::raw(app.messages.reply.as_str()),
            Span::styled("▌", styles::search_style()),
        ])
    } else if app.messages.reply.is_empty() {
        Line::from(Span::styled("Press r to reply", styles::muted_style()))
    } else {
        Line::from(app.messages.reply.as_str())
    };

    let mut lines = vec![reply];
    if thread.is_question {
        let check = if app.messages.publish_answer { "[x]" } else { "[ ]" };
        lines.push(Line::from(Span::styled(
            format!("{} Publish answer to the practice Q&A  [p]", check),
            styles::muted_style(),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel(" Reply ".to_string(), composing)),
        area,
    );
}
