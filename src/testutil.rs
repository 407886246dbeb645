//! Scripted transports for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{TwitterError, TwitterResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Transport that records every request and replies with a canned
/// response. Used to assert both on what was sent and on how many
/// exchanges happened (including zero).
pub(crate) struct RecordingTransport {
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
    response: Option<HttpResponse>,
}

impl RecordingTransport {
    /// Reply 200 with the given body.
    pub(crate) fn ok(body: &str) -> Self {
        Self::with_response(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    pub(crate) fn with_response(response: HttpResponse) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: Some(response),
        }
    }

    /// Fail every send with a transport error.
    pub(crate) fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: None,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> TwitterResult<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.response
            .clone()
            .ok_or_else(|| TwitterError::Transport("connection refused".into()))
    }
}
