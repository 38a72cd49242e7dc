//! Scripted backend for unit tests

use super::backend::Backend;
use crate::error::Result;
use crate::types::{Form, JsonValue, Method};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One call seen by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub key: String,
    pub params: Form,
}

impl RecordedCall {
    /// Value of the first parameter named `name`
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Backend that replays queued responses and records every call
#[derive(Debug, Default)]
pub struct MockBackend {
    responses: Mutex<VecDeque<Result<JsonValue>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next call
    pub fn respond(self, response: Result<JsonValue>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Backend for MockBackend {
    fn call(
        &self,
        method: Method,
        path: &str,
        key: &str,
        params: &[(String, String)],
    ) -> Result<JsonValue> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            key: key.to_string(),
            params: params.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected backend call")
    }
}
