use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(hint_text(app)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Key hints for the focused pane
pub fn hint_text(app: &App) -> &'static str {
    let selected = app.view.state().selected.is_some();
    match app.focus {
        Focus::Search if selected => {
            " F1: Help | Enter: Search now | Tab: Next pane | Ctrl+S: Source | Esc: Reset"
        }
        Focus::Search => {
            " F1: Help | Enter: Search now | Tab/↓: Results | Ctrl+S: Source | Esc: Quit"
        }
        Focus::Browse => " ?: Help | ↑/↓: Move | Enter: Show summary | Tab: Next pane | Esc: Quit",
        Focus::Review if selected => {
            " F1: Help | Enter: Submit review | Ctrl+R/Esc: Reset | Tab: Next pane"
        }
        Focus::Review => " F1: Help | Tab: Next pane",
    }
}
