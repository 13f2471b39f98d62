//! Search box with the source badge and the reset hint

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::focus_border;
use crate::app::{App, Focus};
use crate::service::RequestKind;

pub const SEARCH_BOX_HEIGHT: u16 = 3;

pub fn render_box(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Search;
    let source = match app.view.state().source {
        Some(source) => source.label(),
        None => "all sources",
    };

    let mut title = vec![Span::raw(" Search ")];
    if app.view.is_loading(RequestKind::Search) {
        title.push(Span::styled("… ", Style::default().fg(Color::Yellow)));
    }

    let mut right = Vec::new();
    if app.view.state().panels().reset {
        right.push(Span::styled(
            " Ctrl+R: Reset ",
            Style::default().fg(Color::Magenta),
        ));
    }
    right.push(Span::styled(
        format!(" [{}] ", source),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title))
        .title_top(Line::from(right).alignment(Alignment::Right))
        .border_style(focus_border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.search_input.set_cursor_style(cursor);
    frame.render_widget(&app.search_input, inner);
}
