//! Test doubles for the HTTP port.

use std::sync::Mutex;
use std::time::Duration;

use drivetest_domain::{request::RequestSpec, response::ResponseSpec};
use serde_json::Value;

use crate::ports::{HttpClient, HttpClientError, HttpFuture};

type Responder = dyn Fn(&RequestSpec) -> Result<ResponseSpec, HttpClientError> + Send + Sync;

/// HTTP client that records every request and answers from a closure.
pub struct MockHttpClient {
    responder: Box<Responder>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl MockHttpClient {
    pub fn respond_with<F>(responder: F) -> Self
    where
        F: Fn(&RequestSpec) -> Result<ResponseSpec, HttpClientError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    #[allow(clippy::unwrap_used)]
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    #[allow(clippy::unwrap_used)]
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        let result = (self.responder)(request);
        Box::pin(async move {
            tokio::task::yield_now().await;
            result
        })
    }
}

pub fn json_response(status: u16, body: &Value) -> ResponseSpec {
    ResponseSpec::new(status, body.to_string().into_bytes(), Duration::from_millis(5))
}
