use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::{NotificationLevel, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;

pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired();
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    if frame_area.width < 10 || frame_area.height < 3 {
        return;
    }

    let text_width = notification.message.width() as u16;
    let width = (text_width + 4).min(MAX_WIDTH).min(frame_area.width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    let height = (lines + 2).min(frame_area.height);

    let area = popup::top_right(frame_area, width, height);

    let color = match notification.level {
        NotificationLevel::Info => Color::Green,
        NotificationLevel::Warning => Color::Yellow,
        NotificationLevel::Error => Color::Red,
    };

    popup::clear_area(frame, area);
    let widget = Paragraph::new(notification.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(widget, area);
}
