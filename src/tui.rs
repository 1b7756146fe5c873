use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::loader::Loader;
use crate::state::*;
use crate::ui::layout::compute_layout;
use crate::ui::{pagination, question, sidebar};

pub fn run_tui(
    mut state: AppState,
    loader: Loader,
    load_rx: mpsc::Receiver<LoadEvent>,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    info!(base_url = %state.base_url, "view mounted");
    loader.submit(state.mount());

    let result = main_loop(&mut terminal, &mut state, &loader, &load_rx);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    loader: &Loader,
    load_rx: &mpsc::Receiver<LoadEvent>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    loader.submit(handle_key(key, state));
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size().unwrap_or_default();
                    let area = Rect::new(0, 0, size.width, size.height);
                    loader.submit(handle_mouse(mouse, state, area));
                }
                _ => {}
            }
        }

        while let Ok(ev) = load_rx.try_recv() {
            loader.submit(state.apply(ev));
        }
    }

    Ok(())
}

/// Apply one key press. Returns the request it triggers, if any.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Option<Ticket> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return None;
    }

    if state.has_dialog() {
        return handle_dialog_key(key, state);
    }

    match state.input_mode {
        InputMode::Search => handle_search_key(key, state),
        InputMode::Navigation => handle_nav_key(key, state),
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) -> Option<Ticket> {
    match state.top_dialog().cloned() {
        Some(Dialog::ConfirmDelete(_)) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => state.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') => {
                state.cancel_dialog();
                None
            }
            _ => None,
        },
        Some(Dialog::Alert(_)) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                state.pop_dialog();
            }
            None
        }
        Some(Dialog::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                state.pop_dialog();
            }
            None
        }
        None => None,
    }
}

fn handle_search_key(key: KeyEvent, state: &mut AppState) -> Option<Ticket> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.search_input.push(c);
            None
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            None
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Navigation;
            let term = state.search_input.clone();
            state.submit_search(&term)
        }
        KeyCode::Esc => {
            state.input_mode = InputMode::Navigation;
            None
        }
        _ => None,
    }
}

fn handle_nav_key(key: KeyEvent, state: &mut AppState) -> Option<Ticket> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            None
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
            None
        }
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            None
        }
        KeyCode::Char('r') => state.reload(),
        KeyCode::Tab | KeyCode::BackTab => {
            state.active_panel = match state.active_panel {
                ActivePanel::Sidebar => ActivePanel::Main,
                ActivePanel::Main => ActivePanel::Sidebar,
            };
            None
        }
        KeyCode::PageUp => state.prev_page(),
        KeyCode::PageDown => state.next_page(),
        _ => match state.active_panel {
            ActivePanel::Sidebar => handle_sidebar_key(key, state),
            ActivePanel::Main => handle_main_key(key, state),
        },
    }
}

fn handle_sidebar_key(key: KeyEvent, state: &mut AppState) -> Option<Ticket> {
    match key.code {
        KeyCode::Up => {
            state.category_cursor = state.category_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down => {
            if state.category_cursor + 1 < state.categories.len() {
                state.category_cursor += 1;
            }
            None
        }
        KeyCode::Enter => {
            let id = state.categories.id_at(state.category_cursor)?;
            state.select_category(id)
        }
        _ => None,
    }
}

fn handle_main_key(key: KeyEvent, state: &mut AppState) -> Option<Ticket> {
    match key.code {
        KeyCode::Up => {
            state.question_cursor = state.question_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down => {
            if state.question_cursor + 1 < state.questions.len() {
                state.question_cursor += 1;
            }
            None
        }
        KeyCode::Left => state.prev_page(),
        KeyCode::Right => state.next_page(),
        KeyCode::Home => state.select_page(1),
        KeyCode::End => {
            let last = state.page_count();
            state.select_page(last)
        }
        KeyCode::Char(c @ '1'..='9') => state.select_page(c.to_digit(10).unwrap_or(1)),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = state.selected_question().map(|q| q.id) {
                state.toggle_answer(id);
            }
            None
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = state.selected_question().map(|q| q.id) {
                state.request_delete(id);
            }
            None
        }
        _ => None,
    }
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState, size: Rect) -> Option<Ticket> {
    if state.has_dialog() {
        return None;
    }

    let layout = compute_layout(size);
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(hit) = sidebar::hit_test(layout.categories, layout.search, state, x, y) {
                state.active_panel = ActivePanel::Sidebar;
                return match hit {
                    sidebar::SidebarHit::Heading => state.reload(),
                    sidebar::SidebarHit::Category(id) => state.select_category(id),
                    sidebar::SidebarHit::Search => {
                        state.input_mode = InputMode::Search;
                        None
                    }
                };
            }

            if let Some(page) = pagination::hit_test(layout.pagination, state, x, y) {
                return state.select_page(page);
            }

            if let Some(idx) = question::hit_test(layout.questions, state, y) {
                if x >= layout.questions.x {
                    state.active_panel = ActivePanel::Main;
                    state.question_cursor = idx;
                }
            }
            None
        }
        MouseEventKind::ScrollUp => {
            state.question_cursor = state.question_cursor.saturating_sub(1);
            None
        }
        MouseEventKind::ScrollDown => {
            if state.question_cursor + 1 < state.questions.len() {
                state.question_cursor += 1;
            }
            None
        }
        _ => None,
    }
}
