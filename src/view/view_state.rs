use serde_json::Number;

use super::review_list::ReviewList;
use crate::service::{Source, Summary, TopLists};

/// Where the controller is in the search → select → review cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Searching,
    Selected,
    Submitting,
}

/// Summary figures for the selected item (the reviews live in `ReviewList`)
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub positive: Number,
    pub neutral: Number,
    pub negative: Number,
    pub suggestion: String,
    pub count: Option<u64>,
}

impl From<&Summary> for SummaryStats {
    fn from(summary: &Summary) -> Self {
        Self {
            positive: summary.positive.clone(),
            neutral: summary.neutral.clone(),
            negative: summary.negative.clone(),
            suggestion: summary.suggestion.clone(),
            count: summary.count,
        }
    }
}

/// Which panels a renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub suggestions: bool,
    pub top_lists: bool,
    pub summary: bool,
    pub review_form: bool,
    pub prediction: bool,
    pub reset: bool,
}

/// Everything the UI shows, owned by `ViewController`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub source: Option<Source>,
    pub suggestions: Vec<String>,
    pub selected: Option<String>,
    pub summary: Option<SummaryStats>,
    pub summary_loading: bool,
    pub reviews: ReviewList,
    pub pending_review: String,
    pub prediction: Option<String>,
    pub top_lists: TopLists,
}

impl ViewState {
    pub fn new(source: Option<Source>) -> Self {
        Self {
            query: String::new(),
            source,
            suggestions: Vec::new(),
            selected: None,
            summary: None,
            summary_loading: false,
            reviews: ReviewList::new(),
            pending_review: String::new(),
            prediction: None,
            top_lists: TopLists::default(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Panel visibility is derived, never stored: the summary, review form
    /// and reset affordance exist exactly while an item is selected
    pub fn panels(&self) -> PanelVisibility {
        let selected = self.selected.is_some();
        PanelVisibility {
            suggestions: !self.suggestions.is_empty(),
            top_lists: self.suggestions.is_empty() && !selected,
            summary: selected,
            review_form: selected,
            prediction: selected && self.prediction.is_some(),
            reset: selected,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(None)
    }
}
