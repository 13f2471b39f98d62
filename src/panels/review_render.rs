//! Review form and the prediction line below it

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{focus_border, sentiment_color};
use crate::app::{App, Focus};
use crate::service::RequestKind;

// Input box (3) + prediction line (1)
pub const REVIEW_FORM_HEIGHT: u16 = 4;

pub fn render_form(app: &mut App, frame: &mut Frame, area: Rect) {
    let [input_area, prediction_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let focused = app.focus == Focus::Review;
    let title = if app.view.is_loading(RequestKind::Predict) {
        " Your review (classifying…) "
    } else {
        " Your review "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(focus_border(focused));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    let cursor = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.review_input.set_cursor_style(cursor);
    frame.render_widget(&app.review_input, inner);

    if let Some(sentiment) = prediction_to_show(app) {
        let line = Line::from(vec![
            Span::raw(" Predicted sentiment: "),
            Span::styled(
                sentiment.to_string(),
                Style::default()
                    .fg(sentiment_color(sentiment))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), prediction_area);
    }
}

fn prediction_to_show(app: &App) -> Option<&str> {
    let state = app.view.state();
    if state.panels().prediction {
        state.prediction.as_deref()
    } else {
        None
    }
}
