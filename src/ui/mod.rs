pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod pagination;
pub mod question;
pub mod sidebar;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    sidebar::draw_categories(f, layout.categories, state);
    sidebar::draw_search(f, layout.search, state);
    question::draw_questions(f, layout.questions, state);
    pagination::draw_pagination(f, layout.pagination, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
