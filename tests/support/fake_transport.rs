// ABOUTME: Scripted ApiTransport that records every request.
// ABOUTME: Responses are consumed in order; an empty script answers with an error.

use async_trait::async_trait;
use launchpad::api::{ApiTransport, TransportError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_json(self, value: Value) -> Self {
        self.push(Ok(value))
    }

    /// Next request fails with an HTTP status.
    pub fn then_status(self, method: &'static str, status: u16, body: &str) -> Self {
        self.push(Err(TransportError::Status {
            method,
            status,
            body: body.to_string(),
        }))
    }

    fn push(self, response: Result<Value, TransportError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.requests().into_iter().map(|r| r.method).collect()
    }

    fn answer(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    method,
                    message: "no scripted response".to_string(),
                })
            })
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.answer("GET", path, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.answer("POST", path, Some(body))
    }
}
