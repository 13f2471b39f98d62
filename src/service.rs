//! Review service access
//!
//! Typed HTTP client for the four service endpoints, a background worker
//! that runs requests off the UI thread, and the request sequencing used
//! to drop out-of-order responses.

mod client;
mod sequence;
mod types;
mod worker;

pub use client::{ReviewClient, ServiceError};
pub use sequence::{RequestKind, RequestSequencer};
pub use types::{
    Prediction, PredictRequest, ReviewSample, SearchRequest, SentimentKind, Source, Summary,
    SummaryRequest, TopLists,
};
pub use worker::{
    ServiceLink, ServiceRequest, ServiceResponse, WorkerChannels, service_channels, spawn_worker,
};
