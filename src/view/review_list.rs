use crate::service::ReviewSample;

/// One row of the displayed review list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub sentiment: String,
    pub text: String,
    /// Prepended locally after a prediction; replaced by the next
    /// authoritative summary
    pub optimistic: bool,
}

/// Reviews shown under the summary, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewList {
    entries: Vec<ReviewEntry>,
}

impl ReviewList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replace everything with the service's list, in service order
    ///
    /// Optimistic entries are dropped: the authoritative list already holds
    /// the stored review, so keeping them would show it twice.
    pub fn replace(&mut self, samples: &[ReviewSample]) {
        self.entries = samples
            .iter()
            .map(|s| ReviewEntry {
                sentiment: s.sentiment.clone(),
                text: s.review.clone(),
                optimistic: false,
            })
            .collect();
    }

    pub fn prepend_optimistic(&mut self, sentiment: &str, text: &str) {
        self.entries.insert(
            0,
            ReviewEntry {
                sentiment: sentiment.to_string(),
                text: text.to_string(),
                optimistic: true,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
