use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::service::Source;

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            // Press only; release events would double every key on Windows
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Browse => self.handle_browse_key(key),
            Focus::Review => self.handle_review_key(key),
        }
        self.sync_inputs();
    }

    pub fn handle_paste_event(&mut self, text: String) {
        let text = text.replace(['\r', '\n'], " ");
        match self.focus {
            Focus::Search => {
                self.search_input.insert_str(&text);
                self.run_search();
            }
            Focus::Review => {
                self.review_input.insert_str(&text);
                let review = self.review_text().to_string();
                self.view.set_pending_review(&review);
            }
            Focus::Browse => {}
        }
    }

    /// Keys that work regardless of focus; returns true when consumed
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        // Help blocks everything else while open
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close()
                }
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll_up(1),
                KeyCode::PageDown => self.help.scroll_down(10),
                KeyCode::PageUp => self.help.scroll_up(10),
                _ => {}
            }
            return true;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => {
                    self.reset();
                    return true;
                }
                KeyCode::Char('s') => {
                    self.toggle_source();
                    return true;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            // '?' types into the inputs
            KeyCode::Char('?') if self.focus == Focus::Browse => {
                self.help.toggle();
                true
            }
            KeyCode::Esc => {
                if self.view.state().selected.is_some() {
                    self.reset();
                } else {
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Tab => {
                self.focus = self.next_focus();
                true
            }
            KeyCode::BackTab => {
                self.focus = self.previous_focus();
                true
            }
            _ => false,
        }
    }

    fn next_focus(&self) -> Focus {
        let has_selection = self.view.state().selected.is_some();
        match self.focus {
            Focus::Search => Focus::Browse,
            Focus::Browse if has_selection => Focus::Review,
            Focus::Browse | Focus::Review => Focus::Search,
        }
    }

    fn previous_focus(&self) -> Focus {
        let has_selection = self.view.state().selected.is_some();
        match self.focus {
            Focus::Search if has_selection => Focus::Review,
            Focus::Search | Focus::Review => Focus::Browse,
            Focus::Browse => Focus::Search,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Err(e) = self.view.force_search() {
                    self.notification.show_warning(&e.to_string());
                }
            }
            KeyCode::Down if !self.browse_items().is_empty() => {
                self.focus = Focus::Browse;
            }
            _ => {
                if !is_single_line_edit(&key) {
                    return;
                }
                if self.search_input.input(key) {
                    self.run_search();
                }
            }
        }
    }

    fn run_search(&mut self) {
        let query = self.search_text().to_string();
        if let Err(e) = self.view.search(&query) {
            self.notification.show_warning(&e.to_string());
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let len = self.browse_items().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if len > 0 {
                    self.browse_cursor = (self.browse_cursor + 1).min(len - 1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.browse_cursor == 0 {
                    self.focus = Focus::Search;
                } else {
                    self.browse_cursor -= 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.browse_cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.browse_cursor = len.saturating_sub(1),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Enter => self.select_under_cursor(),
            _ => {}
        }
    }

    fn select_under_cursor(&mut self) {
        let Some(item) = self
            .browse_items()
            .get(self.browse_cursor)
            .map(|i| i.name.to_string())
        else {
            return;
        };

        self.browse_cursor = 0;
        self.focus = Focus::Review;
        if let Err(e) = self.view.select(&item) {
            self.notification.show_error(&e.to_string());
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Err(e) = self.view.submit_review() {
                    self.notification.show_warning(&e.to_string());
                }
            }
            _ => {
                if !is_single_line_edit(&key) {
                    return;
                }
                if self.review_input.input(key) {
                    let review = self.review_text().to_string();
                    self.view.set_pending_review(&review);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.view.reset();
        self.browse_cursor = 0;
        self.focus = Focus::Search;
        self.sync_inputs();
    }

    fn toggle_source(&mut self) {
        match self.view.toggle_source() {
            Ok(source) => {
                let label = source.map(Source::label).unwrap_or("default");
                self.notification.show(&format!("Source: {}", label));
            }
            Err(e) => self.notification.show_warning(&e.to_string()),
        }
    }
}

/// Filters out the textarea's own newline bindings
fn is_single_line_edit(key: &KeyEvent) -> bool {
    !(key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
