//! Left column: suggestions while searching, top lists otherwise

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::focus_border;
use super::highlight::highlight_matches;
use crate::app::{App, BrowseGroup, Focus};
use crate::widgets::text::truncate_to_width;

pub fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Browse;
    let state = app.view.state();
    let items = app.browse_items();
    let showing_suggestions = app.showing_suggestions();

    let title = if showing_suggestions {
        format!(" Suggestions ({}) ", items.len())
    } else {
        " Top places ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(focus_border(focused));

    if items.is_empty() {
        let hint = empty_hint(app);
        let widget = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let base = Style::default().fg(Color::White);
    let matched = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut rows: Vec<ListItem> = Vec::new();
    // Row index of each item, shifted by the group headers
    let mut cursor_row = 0;
    let mut previous_group = None;
    for (i, item) in items.iter().enumerate() {
        if item.group != BrowseGroup::Suggestion && previous_group != Some(item.group) {
            rows.push(group_header(item.group));
        }
        previous_group = Some(item.group);
        if i == app.browse_cursor {
            cursor_row = rows.len();
        }

        let name = truncate_to_width(item.name, width);
        let line = match item.group {
            BrowseGroup::Suggestion => {
                Line::from(highlight_matches(&name, &state.query, base, matched))
            }
            BrowseGroup::Visit | BrowseGroup::Avoid => Line::from(Span::styled(name, base)),
        };
        rows.push(ListItem::new(line));
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(cursor_row));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn group_header(group: BrowseGroup) -> ListItem<'static> {
    let (text, color) = match group {
        BrowseGroup::Avoid => ("Places to avoid", Color::Red),
        _ => ("Top places to visit", Color::Green),
    };
    ListItem::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
}

fn empty_hint(app: &App) -> String {
    let state = app.view.state();
    let min_len = app.view.settings().min_query_len;
    if app.showing_suggestions() {
        if app.view.is_loading(crate::service::RequestKind::Search) {
            "Searching…".to_string()
        } else {
            "No matches.".to_string()
        }
    } else if let Some(selected) = state.selected() {
        format!("Showing {}. Type to search again.", selected)
    } else if state.query.trim().is_empty() {
        "Type to search.".to_string()
    } else {
        format!("Type at least {} characters, or press Enter.", min_len)
    }
}
