use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub categories: Rect,
    pub search: Rect,
    pub questions: Rect,
    pub pagination: Rect,
    pub statusbar: Rect,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(6),    // middle (sidebar + questions)
            Constraint::Length(1), // statusbar
            Constraint::Length(1), // keybar
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // sidebar
            Constraint::Min(20),    // questions
        ])
        .split(vertical[1]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // category list
            Constraint::Length(3), // search box
        ])
        .split(middle[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // question rows
            Constraint::Length(1), // page controls
        ])
        .split(middle[1]);

    AppLayout {
        titlebar: vertical[0],
        categories: sidebar[0],
        search: sidebar[1],
        questions: main[0],
        pagination: main[1],
        statusbar: vertical[2],
        keybar: vertical[3],
    }
}
