//! Help popup rendering

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::help_content::{HELP_FOOTER, HELP_SECTIONS, content_lines};
use super::help_state::HelpPopupState;
use crate::widgets::popup;

pub const HELP_POPUP_WIDTH: u16 = 64;
// borders (2) + blank line and footer (2)
pub const HELP_POPUP_PADDING: u16 = 4;

pub fn render_popup(state: &mut HelpPopupState, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let ideal_height = content_lines() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, ideal_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, section) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                section.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));

    let visible_height = popup_area.height.saturating_sub(2);
    state.update_bounds(lines.len() as u16, visible_height);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((state.offset, 0));

    frame.render_widget(widget, popup_area);
}
