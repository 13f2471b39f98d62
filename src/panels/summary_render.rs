//! Summary panel: sentiment breakdown, recommendation and recent reviews

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::sentiment_color;
use crate::app::App;
use crate::view::{ReviewEntry, SummaryStats};

pub fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.view.state();

    let Some(selected) = state.selected() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Summary ")
            .border_style(Style::default().fg(Color::DarkGray));
        let hint = Paragraph::new("Select an entry on the left to see what reviewers think.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", selected))
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = Vec::new();
    match &state.summary {
        Some(stats) => lines.extend(stat_lines(stats)),
        None if state.summary_loading => lines.push(Line::from(Span::styled(
            "Loading summary…",
            Style::default().fg(Color::Yellow),
        ))),
        None => lines.push(Line::from(Span::styled(
            "No summary available.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    if !state.reviews.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Recent reviews",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(state.reviews.entries().iter().map(review_line));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(widget, area);
}

fn stat_lines(stats: &SummaryStats) -> Vec<Line<'static>> {
    let percent = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(color)),
            Span::styled(
                format!("{}%", value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let mut lines = vec![
        percent("Positive", stats.positive.to_string(), Color::Green),
        percent("Neutral", stats.neutral.to_string(), Color::Yellow),
        percent("Negative", stats.negative.to_string(), Color::Red),
        Line::from(""),
        Line::from(Span::styled(
            stats.suggestion.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(count) = stats.count {
        lines.push(Line::from(Span::styled(
            format!("{} reviews", count),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn review_line(entry: &ReviewEntry) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("[{}] ", entry.sentiment),
            Style::default()
                .fg(sentiment_color(&entry.sentiment))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(entry.text.clone()),
    ];
    if entry.optimistic {
        spans.push(Span::styled(" (new)", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}
