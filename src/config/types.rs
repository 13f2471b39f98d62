// Configuration type definitions

use serde::Deserialize;

use crate::service::Source;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Review service connection section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Search-as-you-type section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Shorter queries are only sent when forced with Enter
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default)]
    pub source: Option<Source>,
}

fn default_min_query_len() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_query_len: default_min_query_len(),
            source: None,
        }
    }
}

/// Review submission section
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReviewConfig {
    /// Re-fetch the summary after a prediction so counts and percentages
    /// reflect the stored review
    #[serde(default = "default_true")]
    pub resync_after_submit: bool,
    #[serde(default = "default_true")]
    pub reject_empty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReviewConfig {
    fn default() -> Self {
        ReviewConfig {
            resync_after_submit: true,
            reject_empty: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

fn default_notification_ms() -> u64 {
    3_000
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            notification_ms: default_notification_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
