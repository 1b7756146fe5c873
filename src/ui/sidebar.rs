use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::state::{ActivePanel, AppState, InputMode};

/// Heading + blank line above the entries.
const HEADER_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarHit {
    Heading,
    Category(u64),
    Search,
}

fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(HEADER_ROWS) as usize
}

/// First visible entry such that the cursor stays on screen.
fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        cursor.saturating_sub(visible - 1)
    }
}

pub fn draw_categories(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.active_panel == ActivePanel::Sidebar
        && state.input_mode == InputMode::Navigation;
    let visible = visible_rows(area);
    let offset = scroll_offset(state.category_cursor, visible);
    let current = state.current_category_id();
    let name_max = area.width.saturating_sub(7) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Categories",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];

    if state.categories.is_empty() {
        lines.push(Line::from(Span::styled(
            "   (none loaded)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (idx, (id, name)) in state.categories.iter().enumerate().skip(offset).take(visible) {
        let is_cursor = focused && idx == state.category_cursor;
        let is_current = current == Some(id);

        let style = if is_cursor {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else if is_current {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let label: String = name.chars().take(name_max).collect();
        lines.push(Line::from(vec![
            Span::styled(if is_cursor { " ▸ " } else { "   " }, style),
            Span::styled(if is_current { "● " } else { "  " }, style.fg(Color::Yellow)),
            Span::styled(label, style),
        ]));
    }

    let border_style = if state.active_panel == ActivePanel::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(border_style);
    f.render_widget(Paragraph::new(lines).block(block), area);

    if state.categories.len() > visible {
        let scrollbar_area = Rect {
            x: area.x,
            y: area.y + HEADER_ROWS,
            width: area.width,
            height: visible as u16,
        };
        let mut scrollbar_state = ScrollbarState::new(state.categories.len().saturating_sub(1))
            .position(state.category_cursor);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

pub fn draw_search(f: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.input_mode == InputMode::Search;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if editing {
        Line::from(vec![
            Span::raw(state.search_input.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if state.search_input.is_empty() {
        Line::from(Span::styled(
            "press / to search",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(state.search_input.clone())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(border_style);
    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Map a click inside the sidebar to what it landed on.
pub fn hit_test(
    categories_area: Rect,
    search_area: Rect,
    state: &AppState,
    x: u16,
    y: u16,
) -> Option<SidebarHit> {
    if contains(search_area, x, y) {
        return Some(SidebarHit::Search);
    }
    if !contains(categories_area, x, y) {
        return None;
    }

    let row = y - categories_area.y;
    if row == 0 {
        return Some(SidebarHit::Heading);
    }
    if row < HEADER_ROWS {
        return None;
    }

    let visible = visible_rows(categories_area);
    let offset = scroll_offset(state.category_cursor, visible);
    let idx = offset + (row - HEADER_ROWS) as usize;
    state.categories.id_at(idx).map(SidebarHit::Category)
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
