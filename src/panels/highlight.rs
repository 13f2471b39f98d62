use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::style::Style;
use ratatui::text::Span;

/// Split `text` into spans, styling the characters that fuzzy-match `query`
pub fn highlight_matches(
    text: &str,
    query: &str,
    base: Style,
    matched: Style,
) -> Vec<Span<'static>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let Some((_, indices)) = SkimMatcherV2::default().fuzzy_indices(text, query) else {
        return vec![Span::styled(text.to_string(), base)];
    };

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;
    for (i, ch) in text.chars().enumerate() {
        let is_match = indices.contains(&i);
        if is_match != run_matched && !run.is_empty() {
            let style = if run_matched { matched } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_matched = is_match;
        run.push(ch);
    }
    if !run.is_empty() {
        let style = if run_matched { matched } else { base };
        spans.push(Span::styled(run, style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    fn styles() -> (Style, Style) {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    }

    fn matched_text(spans: &[Span], matched: Style) -> String {
        spans
            .iter()
            .filter(|s| s.style == matched)
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_prefix_match_is_highlighted() {
        let (base, matched) = styles();
        let spans = highlight_matches("Pizza Place", "piz", base, matched);
        assert_eq!(matched_text(&spans, matched), "Piz");

        let full: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(full, "Pizza Place");
    }

    #[test]
    fn test_no_match_is_plain() {
        let (base, matched) = styles();
        let spans = highlight_matches("Sushi Bar", "xyz", base, matched);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, base);
    }

    #[test]
    fn test_empty_query_is_plain() {
        let (base, matched) = styles();
        let spans = highlight_matches("Cafe", "  ", base, matched);
        assert_eq!(spans.len(), 1);
    }
}
