use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

const TITLE: &str = "[ Trivia ]";

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let server = format!(" {} ", state.base_url);

    // Center the title, right-align the server
    let available = area.width as usize;
    let title_len = TITLE.chars().count();
    let server_len = server.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + server_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(server, Style::default().fg(Color::Rgb(200, 200, 120))),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
