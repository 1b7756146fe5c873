use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, Dialog};

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(dialog) = state.top_dialog() else {
        return;
    };

    match dialog {
        Dialog::ConfirmDelete(id) => draw_confirm_delete(f, area, state, *id),
        Dialog::Alert(message) => draw_alert(f, area, message),
        Dialog::Help => draw_help(f, area),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn draw_confirm_delete(f: &mut Frame, area: Rect, state: &AppState, id: u64) {
    let preview: String = state
        .questions
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.question.chars().take(40).collect())
        .unwrap_or_else(|| format!("question #{}", id));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to delete the question?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("   {}", preview)),
        Line::from(""),
        Line::from(vec![
            Span::styled("   [Enter] Delete", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    let rect = centered_rect(56, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_alert(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   ⚠  Request failed",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("   {}", message)),
        Line::from(""),
        Line::from(Span::styled(
            "                  [Enter] OK",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(64, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, rect);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Key Bindings",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   ↑/↓        Move within panel"),
        Line::from("   ←/→        Previous/Next page"),
        Line::from("   PgUp/PgDn  Previous/Next page"),
        Line::from("   1-9        Go to page"),
        Line::from("   Tab        Switch panel"),
        Line::from("   Enter      Filter by category"),
        Line::from("   Space      Show/hide answer"),
        Line::from("   d / Del    Delete question"),
        Line::from("   /          Search questions"),
        Line::from("   r          All questions"),
        Line::from("   q          Quit"),
        Line::from("   ?          This help"),
        Line::from("   Esc        Close dialog"),
        Line::from(""),
        Line::from(Span::styled(
            "        [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(44, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
