//! Test doubles for the HTTP seam.

use std::sync::{Arc, Mutex};

use super::http::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportResult};

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    outcome: Result<(u16, String), String>,
}

impl FakeTransport {
    pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_outcome(Ok((response_status, response_body.into())))
    }

    /// Every call fails before a response is received.
    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(Err(message.into()))
    }

    fn with_outcome(outcome: Result<(u16, String), String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                outcome,
            })),
        }
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let outcome = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.outcome.clone()
            };
            match outcome {
                Ok((status, body)) => Ok(HttpResponse { status, body }),
                Err(message) => Err(message.into()),
            }
        })
    }
}

pub(crate) fn should_skip_httpmock() -> bool {
    match std::net::TcpListener::bind(("127.0.0.1", 0)) {
        Ok(_) => false,
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
            eprintln!("skipping httpmock test: sandbox forbids binding to localhost");
            true
        }
        Err(err) => panic!("failed to bind localhost for httpmock tests: {err}"),
    }
}
