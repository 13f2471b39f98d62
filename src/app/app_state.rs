use std::sync::mpsc::Receiver;

use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::help::HelpPopupState;
use crate::notification::NotificationState;
use crate::service::{ServiceLink, ServiceResponse};
use crate::view::{ControllerSettings, ResponseOutcome, ViewController};

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Browse,
    Review,
}

/// Where an entry of the browse list comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseGroup {
    Suggestion,
    Visit,
    Avoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseItem<'a> {
    pub name: &'a str,
    pub group: BrowseGroup,
}

/// Application state
pub struct App {
    pub view: ViewController,
    pub search_input: TextArea<'static>,
    pub review_input: TextArea<'static>,
    pub focus: Focus,
    pub browse_cursor: usize,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub should_quit: bool,
    response_rx: Option<Receiver<ServiceResponse>>,
}

impl App {
    /// Without a service link every request fails with a notice; used by
    /// tests that only look at layout
    pub fn new(config: &Config, link: Option<ServiceLink>) -> Self {
        let (request_tx, response_rx) = match link {
            Some(link) => (Some(link.request_tx), Some(link.response_rx)),
            None => (None, None),
        };

        Self {
            view: ViewController::new(
                ControllerSettings::from(config),
                config.search.source,
                request_tx,
            ),
            search_input: new_input("Search places or products"),
            review_input: new_input("Write a review"),
            focus: Focus::Search,
            browse_cursor: 0,
            help: HelpPopupState::new(),
            notification: NotificationState::new(config.ui.notification_ms),
            should_quit: false,
            response_rx,
        }
    }

    /// Kick off the requests the first screen needs
    pub fn start(&mut self) {
        if let Err(e) = self.view.load_top_lists() {
            self.notification.show_error(&e.to_string());
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn search_text(&self) -> &str {
        first_line(&self.search_input)
    }

    pub fn review_text(&self) -> &str {
        first_line(&self.review_input)
    }

    /// Apply every response the worker has delivered since the last frame
    pub fn poll_responses(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };
        let responses: Vec<ServiceResponse> = rx.try_iter().collect();
        for response in responses {
            self.apply_response(response);
        }
    }

    pub fn apply_response(&mut self, response: ServiceResponse) {
        if let ResponseOutcome::Failed(message) = self.view.apply_response(response) {
            self.notification.show_error(&message);
        }
        self.sync_inputs();
    }

    /// True while the left column belongs to a search, even one that
    /// matched nothing
    pub fn showing_suggestions(&self) -> bool {
        let state = self.view.state();
        let min_len = self.view.settings().min_query_len;
        !state.suggestions.is_empty()
            || (!state.query.trim().is_empty() && state.query.chars().count() >= min_len)
    }

    /// Entries of the left column: suggestions while searching, otherwise
    /// the top lists
    pub fn browse_items(&self) -> Vec<BrowseItem<'_>> {
        let state = self.view.state();
        if self.showing_suggestions() {
            return state
                .suggestions
                .iter()
                .map(|name| BrowseItem {
                    name,
                    group: BrowseGroup::Suggestion,
                })
                .collect();
        }
        if state.selected.is_some() {
            return Vec::new();
        }

        let visit = state.top_lists.visit.iter().map(|name| BrowseItem {
            name,
            group: BrowseGroup::Visit,
        });
        let avoid = state.top_lists.avoid.iter().map(|name| BrowseItem {
            name,
            group: BrowseGroup::Avoid,
        });
        visit.chain(avoid).collect()
    }

    /// Bring the text inputs and the cursor in line with the view state
    ///
    /// Select clears the query and a successful submit clears the review;
    /// the inputs must follow.
    pub(super) fn sync_inputs(&mut self) {
        let state = self.view.state();
        if self.search_text() != state.query {
            let query = state.query.clone();
            replace_text(&mut self.search_input, &query);
        }
        if self.review_text() != state.pending_review {
            let review = state.pending_review.clone();
            replace_text(&mut self.review_input, &review);
        }

        let len = self.browse_items().len();
        self.browse_cursor = self.browse_cursor.min(len.saturating_sub(1));
        if self.focus == Focus::Review && state.selected.is_none() {
            self.focus = Focus::Search;
        }
    }
}

fn new_input(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

fn first_line<'a>(textarea: &'a TextArea<'static>) -> &'a str {
    textarea.lines().first().map(String::as_str).unwrap_or("")
}

fn replace_text(textarea: &mut TextArea<'static>, text: &str) {
    textarea.select_all();
    textarea.cut();
    textarea.insert_str(text);
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
