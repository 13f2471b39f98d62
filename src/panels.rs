//! Renderers for the individual panels
//!
//! Each renderer reads `App` and draws into the area it is given; layout
//! is decided by `App::render`.

pub mod browse_render;
pub mod footer_render;
mod highlight;
pub mod review_render;
pub mod search_render;
pub mod summary_render;

use ratatui::style::{Color, Style};

use crate::service::SentimentKind;

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn sentiment_color(label: &str) -> Color {
    match SentimentKind::classify(label) {
        SentimentKind::Positive => Color::Green,
        SentimentKind::Neutral => Color::Yellow,
        SentimentKind::Negative => Color::Red,
        SentimentKind::Unknown => Color::Gray,
    }
}
