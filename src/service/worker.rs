//! Review service worker
//!
//! Runs service calls on a background thread so the UI never blocks.
//! Requests arrive over an unbounded tokio channel; each one is spawned as
//! its own task on a current-thread runtime, and results go back to the
//! UI thread over a std channel that the event loop drains every tick.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::client::{ReviewClient, ServiceError};
use super::sequence::RequestKind;
use super::types::{Prediction, Source, Summary, TopLists};

/// Request messages sent to the worker
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceRequest {
    Search {
        request_id: u64,
        query: String,
        source: Option<Source>,
    },
    Summary {
        request_id: u64,
        item: String,
        source: Option<Source>,
    },
    Predict {
        request_id: u64,
        review: String,
        item: String,
    },
    TopPlaces {
        request_id: u64,
    },
}

impl ServiceRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            ServiceRequest::Search { request_id, .. }
            | ServiceRequest::Summary { request_id, .. }
            | ServiceRequest::Predict { request_id, .. }
            | ServiceRequest::TopPlaces { request_id } => *request_id,
        }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            ServiceRequest::Search { .. } => RequestKind::Search,
            ServiceRequest::Summary { .. } => RequestKind::Summary,
            ServiceRequest::Predict { .. } => RequestKind::Predict,
            ServiceRequest::TopPlaces { .. } => RequestKind::TopPlaces,
        }
    }
}

/// Response messages sent back to the UI thread
#[derive(Debug)]
pub enum ServiceResponse {
    Suggestions {
        request_id: u64,
        items: Vec<String>,
    },
    Summary {
        request_id: u64,
        item: String,
        summary: Summary,
    },
    Prediction {
        request_id: u64,
        item: String,
        review: String,
        prediction: Prediction,
    },
    TopLists {
        request_id: u64,
        lists: TopLists,
    },
    Failed {
        request_id: u64,
        kind: RequestKind,
        error: ServiceError,
    },
}

/// UI side of the worker channels
pub struct ServiceLink {
    pub request_tx: UnboundedSender<ServiceRequest>,
    pub response_rx: Receiver<ServiceResponse>,
}

/// Worker side of the worker channels
pub struct WorkerChannels {
    pub request_rx: UnboundedReceiver<ServiceRequest>,
    pub response_tx: Sender<ServiceResponse>,
}

pub fn service_channels() -> (ServiceLink, WorkerChannels) {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    (
        ServiceLink {
            request_tx,
            response_rx,
        },
        WorkerChannels {
            request_rx,
            response_tx,
        },
    )
}

/// Spawn the service worker thread
///
/// The thread exits once every `ServiceLink` request sender is dropped.
pub fn spawn_worker(
    client: ReviewClient,
    channels: WorkerChannels,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("revu-service".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(
                client,
                channels.request_rx,
                channels.response_tx,
            ));
        })
}

/// Main worker loop - dispatches requests until the channel is closed
async fn worker_loop(
    client: ReviewClient,
    mut request_rx: UnboundedReceiver<ServiceRequest>,
    response_tx: Sender<ServiceResponse>,
) {
    let mut search_cancel: Option<CancellationToken> = None;

    while let Some(request) = request_rx.recv().await {
        let cancel = CancellationToken::new();

        // Only one search is ever useful; abort the one it supersedes
        if request.kind() == RequestKind::Search {
            if let Some(previous) = search_cancel.replace(cancel.clone()) {
                previous.cancel();
            }
        }

        log::debug!(
            "Dispatching {} request {}",
            request.kind(),
            request.request_id()
        );
        tokio::spawn(handle_request(
            client.clone(),
            request,
            cancel,
            response_tx.clone(),
        ));
    }

    log::debug!("Service worker shutting down");
}

async fn handle_request(
    client: ReviewClient,
    request: ServiceRequest,
    cancel: CancellationToken,
    response_tx: Sender<ServiceResponse>,
) {
    let request_id = request.request_id();
    let kind = request.kind();

    let response = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            log::debug!("Cancelled request {} before it completed", request_id);
            ServiceResponse::Failed {
                request_id,
                kind,
                error: ServiceError::Cancelled,
            }
        }
        response = execute(&client, request) => response,
    };

    if response_tx.send(response).is_err() {
        log::debug!("UI gone, dropping response for request {}", request_id);
    }
}

async fn execute(client: &ReviewClient, request: ServiceRequest) -> ServiceResponse {
    let kind = request.kind();
    let request_id = request.request_id();

    let result = match request {
        ServiceRequest::Search { query, source, .. } => client
            .search(&query, source)
            .await
            .map(|items| ServiceResponse::Suggestions { request_id, items }),
        ServiceRequest::Summary { item, source, .. } => {
            let result = client.summary(&item, source).await;
            result.map(|summary| ServiceResponse::Summary {
                request_id,
                item,
                summary,
            })
        }
        ServiceRequest::Predict { review, item, .. } => {
            let result = client.predict(&review, Some(&item)).await;
            result.map(|prediction| ServiceResponse::Prediction {
                request_id,
                item,
                review,
                prediction,
            })
        }
        ServiceRequest::TopPlaces { .. } => client
            .top_places()
            .await
            .map(|lists| ServiceResponse::TopLists { request_id, lists }),
    };

    result.unwrap_or_else(|error| {
        log::warn!("{} request {} failed: {}", kind, request_id, error);
        ServiceResponse::Failed {
            request_id,
            kind,
            error,
        }
    })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
