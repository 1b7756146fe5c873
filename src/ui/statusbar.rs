use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, LoadStatus};

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("page {}/{}", state.page, state.page_count().max(1)),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} questions", state.total_questions),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(label) = state
        .current_category
        .as_ref()
        .and_then(|c| c.label(&state.categories))
    {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("category: {}", label),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw("   "));
    spans.push(match &state.listing_status {
        LoadStatus::Idle => Span::styled("idle", Style::default().fg(Color::DarkGray)),
        LoadStatus::Loading => Span::styled("loading…", Style::default().fg(Color::Yellow)),
        LoadStatus::Loaded(at) => Span::styled(
            format!("loaded {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        ),
        LoadStatus::Failed(reason) => Span::styled(
            format!("failed: {}", reason),
            Style::default().fg(Color::Red),
        ),
    });

    if state.delete_status.is_loading() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("deleting…", Style::default().fg(Color::Red)));
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled("[?] help", Style::default().fg(Color::DarkGray)));

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
