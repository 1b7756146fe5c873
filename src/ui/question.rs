use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::model::Question;
use crate::state::{ActivePanel, AppState, LoadStatus};

const MAX_DIFFICULTY: u8 = 5;

/// Rows taken by one question: text, meta line, optional answer, spacer.
fn row_height(state: &AppState, question: &Question) -> usize {
    if state.is_revealed(question.id) {
        4
    } else {
        3
    }
}

/// Index of the first question drawn so that the cursor row fits in `visible` lines.
fn first_visible(state: &AppState, visible: usize) -> usize {
    let cursor = state.question_cursor.min(state.questions.len().saturating_sub(1));
    let mut used = 0;
    let mut first = cursor;
    for idx in (0..=cursor).rev() {
        let Some(q) = state.questions.get(idx) else {
            break;
        };
        used += row_height(state, q);
        if used > visible {
            break;
        }
        first = idx;
    }
    first
}

fn difficulty_stars(difficulty: u8) -> String {
    let filled = difficulty.min(MAX_DIFFICULTY) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_DIFFICULTY as usize - filled)
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn question_lines<'a>(
    state: &'a AppState,
    question: &'a Question,
    is_cursor: bool,
    width: usize,
) -> Vec<Line<'a>> {
    let text_style = if is_cursor {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let category = match state.category_name(question) {
        Some(name) => Span::styled(name.to_string(), Style::default().fg(Color::LightBlue)),
        None => Span::styled("—", Style::default().fg(Color::DarkGray)),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(if is_cursor { " ▸ " } else { "   " }, text_style),
            Span::styled(truncate(&question.question, width.saturating_sub(3)), text_style),
        ]),
        Line::from(vec![
            Span::raw("     "),
            category,
            Span::styled("  ", Style::default()),
            Span::styled(
                difficulty_stars(question.difficulty),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  #{}", question.id),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if state.is_revealed(question.id) {
        lines.push(Line::from(vec![
            Span::styled("     Answer: ", Style::default().fg(Color::Green)),
            Span::styled(
                truncate(&question.answer, width.saturating_sub(13)),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

pub fn draw_questions(f: &mut Frame, area: Rect, state: &AppState) {
    let visible = area.height.saturating_sub(1) as usize; // title row
    let width = area.width as usize;
    let focused = state.active_panel == ActivePanel::Main;

    let mut lines: Vec<Line> = Vec::new();

    if state.questions.is_empty() {
        let message = match &state.listing_status {
            LoadStatus::Idle | LoadStatus::Loading => "Loading questions…",
            _ => "No questions.",
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("   {}", message),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let first = first_visible(state, visible);
        for (idx, question) in state.questions.iter().enumerate().skip(first) {
            if lines.len() >= visible {
                break;
            }
            let is_cursor = focused && idx == state.question_cursor;
            lines.extend(question_lines(state, question, is_cursor, width));
        }
        lines.truncate(visible);
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .title(" Questions ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });
    f.render_widget(Paragraph::new(lines).block(block), area);

    if state.questions.len() > 1 {
        let scrollbar_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: visible as u16,
        };
        let mut scrollbar_state = ScrollbarState::new(state.questions.len().saturating_sub(1))
            .position(state.question_cursor);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

/// Index of the question under row `y`, mirroring `draw_questions`.
pub fn hit_test(area: Rect, state: &AppState, y: u16) -> Option<usize> {
    if y <= area.y || y >= area.y + area.height || state.questions.is_empty() {
        return None;
    }
    let visible = area.height.saturating_sub(1) as usize;
    let mut row = (y - area.y - 1) as usize;
    for (idx, question) in state.questions.iter().enumerate().skip(first_visible(state, visible)) {
        let height = row_height(state, question);
        if row < height {
            // The spacer line belongs to no question.
            return (row + 1 < height).then_some(idx);
        }
        row -= height;
    }
    None
}
