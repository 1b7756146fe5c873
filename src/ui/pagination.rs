use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::pagination::{page_strip, PageSlot, WINDOW_RADIUS};
use crate::state::AppState;

const PREFIX: &str = " Page ";

fn label(slot: &PageSlot) -> String {
    match slot {
        PageSlot::Page(control) => format!(" {} ", control.number),
        PageSlot::Gap => " … ".to_string(),
    }
}

pub fn draw_pagination(f: &mut Frame, area: Rect, state: &AppState) {
    let slots = page_strip(state.total_questions, state.page, WINDOW_RADIUS);
    if slots.is_empty() {
        f.render_widget(Paragraph::new(""), area);
        return;
    }

    let mut spans = vec![Span::styled(PREFIX, Style::default().fg(Color::DarkGray))];
    for slot in &slots {
        let style = match slot {
            PageSlot::Page(control) if control.active => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            PageSlot::Page(_) => Style::default().fg(Color::Cyan),
            PageSlot::Gap => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(label(slot), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Page number under column `x`, mirroring `draw_pagination`.
pub fn hit_test(area: Rect, state: &AppState, x: u16, y: u16) -> Option<u32> {
    if y != area.y || x < area.x {
        return None;
    }
    let mut col = area.x as usize + PREFIX.chars().count();
    for slot in page_strip(state.total_questions, state.page, WINDOW_RADIUS) {
        let width = label(&slot).chars().count();
        if (x as usize) >= col && (x as usize) < col + width {
            return match slot {
                PageSlot::Page(control) => Some(control.number),
                PageSlot::Gap => None,
            };
        }
        col += width + 1;
    }
    None
}
