//! View controller
//!
//! Drives the search → select → review cycle. Every user action updates
//! `ViewState` synchronously and may queue one service request; responses
//! come back later through `apply_response`, which drops anything that is
//! no longer the latest request of its kind.

use tokio::sync::mpsc::UnboundedSender;

use super::view_state::{SummaryStats, ViewPhase, ViewState};
use crate::config::Config;
use crate::error::ViewError;
use crate::service::{
    RequestKind, RequestSequencer, ServiceError, ServiceRequest, ServiceResponse, Source,
};

/// Behaviour switches taken from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub min_query_len: usize,
    pub resync_after_submit: bool,
    pub reject_empty: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            min_query_len: config.search.min_query_len,
            resync_after_submit: config.review.resync_after_submit,
            reject_empty: config.review.reject_empty,
        }
    }
}

/// What a search keystroke led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDispatch {
    Sent(u64),
    TooShort,
    Empty,
}

/// What applying a service response did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    /// Superseded or no longer wanted; view untouched
    Stale,
    /// The call failed; view untouched apart from loading flags
    Failed(String),
}

pub struct ViewController {
    state: ViewState,
    settings: ControllerSettings,
    sequencer: RequestSequencer,
    request_tx: Option<UnboundedSender<ServiceRequest>>,
}

impl ViewController {
    pub fn new(
        settings: ControllerSettings,
        source: Option<Source>,
        request_tx: Option<UnboundedSender<ServiceRequest>>,
    ) -> Self {
        Self {
            state: ViewState::new(source),
            settings,
            sequencer: RequestSequencer::new(),
            request_tx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn phase(&self) -> ViewPhase {
        if self.sequencer.in_flight(RequestKind::Predict) {
            ViewPhase::Submitting
        } else if self.state.selected.is_some() {
            ViewPhase::Selected
        } else if self.sequencer.in_flight(RequestKind::Search) {
            ViewPhase::Searching
        } else {
            ViewPhase::Idle
        }
    }

    pub fn is_loading(&self, kind: RequestKind) -> bool {
        self.sequencer.in_flight(kind)
    }

    /// Search as the user types
    ///
    /// Queries below the minimum length only clear the suggestion list.
    pub fn search(&mut self, query: &str) -> Result<SearchDispatch, ViewError> {
        self.run_search(query, false)
    }

    /// Search with the current query regardless of its length
    pub fn force_search(&mut self) -> Result<SearchDispatch, ViewError> {
        let query = self.state.query.clone();
        self.run_search(&query, true)
    }

    fn run_search(&mut self, query: &str, forced: bool) -> Result<SearchDispatch, ViewError> {
        self.state.query = query.to_string();

        if query.trim().is_empty() {
            self.clear_suggestions();
            return Ok(SearchDispatch::Empty);
        }
        if !forced && query.chars().count() < self.settings.min_query_len {
            self.clear_suggestions();
            return Ok(SearchDispatch::TooShort);
        }

        let request_id = self.sequencer.issue(RequestKind::Search);
        self.send(ServiceRequest::Search {
            request_id,
            query: query.to_string(),
            source: self.state.source,
        })?;
        Ok(SearchDispatch::Sent(request_id))
    }

    fn clear_suggestions(&mut self) {
        self.state.suggestions.clear();
        self.sequencer.invalidate(RequestKind::Search);
    }

    /// Choose an item and fetch its summary
    ///
    /// Ends the current search cycle: the query and suggestions are cleared
    /// and any search still in flight is ignored when it returns.
    pub fn select(&mut self, item: &str) -> Result<u64, ViewError> {
        if self.state.selected() != Some(item) {
            self.state.summary = None;
            self.state.reviews.clear();
            self.state.prediction = None;
            self.state.pending_review.clear();
            self.sequencer.invalidate(RequestKind::Predict);
        }

        self.state.selected = Some(item.to_string());
        self.state.query.clear();
        self.clear_suggestions();
        self.request_summary()
    }

    fn request_summary(&mut self) -> Result<u64, ViewError> {
        let item = self.state.selected.clone().ok_or(ViewError::NoSelection)?;

        let request_id = self.sequencer.issue(RequestKind::Summary);
        self.state.summary_loading = true;
        self.send(ServiceRequest::Summary {
            request_id,
            item,
            source: self.state.source,
        })?;
        Ok(request_id)
    }

    pub fn set_pending_review(&mut self, text: &str) {
        self.state.pending_review = text.to_string();
    }

    pub fn submit_review(&mut self) -> Result<u64, ViewError> {
        let item = self.state.selected.clone().ok_or(ViewError::NoSelection)?;
        if self.settings.reject_empty && self.state.pending_review.trim().is_empty() {
            return Err(ViewError::EmptyInput("Review"));
        }
        if self.sequencer.in_flight(RequestKind::Predict) {
            return Err(ViewError::SubmissionPending);
        }

        let request_id = self.sequencer.issue(RequestKind::Predict);
        self.send(ServiceRequest::Predict {
            request_id,
            review: self.state.pending_review.clone(),
            item,
        })?;
        Ok(request_id)
    }

    pub fn load_top_lists(&mut self) -> Result<u64, ViewError> {
        let request_id = self.sequencer.issue(RequestKind::TopPlaces);
        self.send(ServiceRequest::TopPlaces { request_id })?;
        Ok(request_id)
    }

    /// Back to the initial search screen
    ///
    /// The source filter and the top lists survive; everything tied to the
    /// search cycle or the selection is dropped, including responses still
    /// in flight.
    pub fn reset(&mut self) {
        let source = self.state.source;
        let top_lists = std::mem::take(&mut self.state.top_lists);

        self.state = ViewState::new(source);
        self.state.top_lists = top_lists;

        self.sequencer.invalidate(RequestKind::Search);
        self.sequencer.invalidate(RequestKind::Summary);
        self.sequencer.invalidate(RequestKind::Predict);
    }

    /// Cycle the source filter and refresh whatever depends on it
    pub fn toggle_source(&mut self) -> Result<Option<Source>, ViewError> {
        self.state.source = Source::cycle(self.state.source);

        // Both may be live: typing while an item is selected keeps it
        let summary = match self.state.selected {
            Some(_) => self.request_summary().map(|_| ()),
            None => Ok(()),
        };
        let query = self.state.query.clone();
        let search = self.search(&query).map(|_| ());

        summary.and(search)?;
        Ok(self.state.source)
    }

    pub fn apply_response(&mut self, response: ServiceResponse) -> ResponseOutcome {
        match response {
            ServiceResponse::Suggestions { request_id, items } => {
                if !self.sequencer.settle(RequestKind::Search, request_id) {
                    return self.stale(RequestKind::Search, request_id);
                }
                self.state.suggestions = items;
                ResponseOutcome::Applied
            }
            ServiceResponse::Summary {
                request_id,
                item,
                summary,
            } => {
                if !self.sequencer.settle(RequestKind::Summary, request_id) {
                    return self.stale(RequestKind::Summary, request_id);
                }
                self.state.summary_loading = false;
                if self.state.selected() != Some(item.as_str()) {
                    return self.stale(RequestKind::Summary, request_id);
                }
                self.state.summary = Some(SummaryStats::from(&summary));
                self.state.reviews.replace(&summary.reviews);
                ResponseOutcome::Applied
            }
            ServiceResponse::Prediction {
                request_id,
                item,
                review,
                prediction,
            } => {
                if !self.sequencer.settle(RequestKind::Predict, request_id)
                    || self.state.selected() != Some(item.as_str())
                {
                    return self.stale(RequestKind::Predict, request_id);
                }

                self.state
                    .reviews
                    .prepend_optimistic(&prediction.sentiment, &review);
                self.state.prediction = Some(prediction.sentiment);
                self.state.pending_review.clear();

                if self.settings.resync_after_submit {
                    if let Err(e) = self.request_summary() {
                        return ResponseOutcome::Failed(e.to_string());
                    }
                }
                ResponseOutcome::Applied
            }
            ServiceResponse::TopLists { request_id, lists } => {
                if !self.sequencer.settle(RequestKind::TopPlaces, request_id) {
                    return self.stale(RequestKind::TopPlaces, request_id);
                }
                self.state.top_lists = lists;
                ResponseOutcome::Applied
            }
            ServiceResponse::Failed {
                request_id,
                kind,
                error,
            } => {
                if matches!(error, ServiceError::Cancelled)
                    || !self.sequencer.settle(kind, request_id)
                {
                    return self.stale(kind, request_id);
                }
                if kind == RequestKind::Summary {
                    self.state.summary_loading = false;
                }
                ResponseOutcome::Failed(format!("{} failed: {}", kind, error))
            }
        }
    }

    fn stale(&self, kind: RequestKind, request_id: u64) -> ResponseOutcome {
        log::debug!(
            "Dropping stale {} response {} (latest {:?})",
            kind,
            request_id,
            self.sequencer.latest(kind)
        );
        ResponseOutcome::Stale
    }

    fn send(&mut self, request: ServiceRequest) -> Result<(), ViewError> {
        let kind = request.kind();
        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if !sent {
            log::warn!("Service worker unavailable, {} request not sent", kind);
            self.sequencer.invalidate(kind);
            if kind == RequestKind::Summary {
                self.state.summary_loading = false;
            }
            return Err(ViewError::ServiceUnavailable);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
