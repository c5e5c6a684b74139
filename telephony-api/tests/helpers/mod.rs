//! Test helpers: an in-memory transport that records every request

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use telephony_api::{Params, RestError, Transport};

/// Parent URI used by resources built directly from fixtures
pub const PARENT_URI: &str = "parentUri";

pub const CALL_ID: &str = "c-11111111111111111111111";

/// One recorded transport call
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub name: &'static str,
    pub uri: String,
    pub params: Params,
}

impl Request {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}

/// Transport replaying canned responses and logging each request
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<Request>>,
    object: Mutex<Option<Value>>,
    array: Mutex<Vec<Value>>,
    write_response: Mutex<Option<Value>>,
    fail_reads: Mutex<Option<u16>>,
    fail_writes: Mutex<bool>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Response to every `read`
    pub fn respond_with(&self, object: Value) {
        *self.object.lock() = Some(object);
    }

    /// Response to every `read_collection`
    pub fn respond_with_array(&self, items: Value) {
        *self.array.lock() = match items {
            Value::Array(items) => items,
            other => vec![other],
        };
    }

    /// Response body of every `write`
    pub fn respond_to_write(&self, body: Value) {
        *self.write_response.lock() = Some(body);
    }

    /// Make every subsequent `read` fail with the given HTTP status
    pub fn fail_reads(&self, status: u16) {
        *self.fail_reads.lock() = Some(status);
    }

    /// Make every subsequent `write` fail as a network error
    pub fn fail_writes(&self) {
        *self.fail_writes.lock() = true;
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    pub fn request(&self, index: usize) -> Request {
        self.requests
            .lock()
            .get(index)
            .cloned()
            .unwrap_or_else(|| panic!("no request #{}", index))
    }

    pub fn clear(&self) {
        self.requests.lock().clear();
    }

    fn record(&self, name: &'static str, uri: &str, params: Params) {
        self.requests.lock().push(Request {
            name,
            uri: uri.to_string(),
            params,
        });
    }
}

impl Transport for RecordingTransport {
    fn read(&self, uri: &str) -> Result<Value, RestError> {
        self.record("read", uri, Params::new());
        if let Some(status) = *self.fail_reads.lock() {
            return Err(RestError::Fault {
                status,
                message: "read refused".to_string(),
                payload: None,
            });
        }
        Ok(self.object.lock().clone().unwrap_or_else(|| json!({})))
    }

    fn read_collection(&self, uri: &str, query: &Params) -> Result<Vec<Value>, RestError> {
        self.record("read_collection", uri, query.clone());
        Ok(self.array.lock().clone())
    }

    fn write(&self, uri: &str, body: &Params) -> Result<Option<Value>, RestError> {
        self.record("write", uri, body.clone());
        if *self.fail_writes.lock() {
            return Err(RestError::Network(format!("connection reset writing {}", uri)));
        }
        Ok(self.write_response.lock().clone())
    }

    fn delete(&self, uri: &str) -> Result<(), RestError> {
        self.record("delete", uri, Params::new());
        Ok(())
    }

    fn download_to(&self, uri: &str, destination: &Path) -> Result<(), RestError> {
        let mut params = Params::new();
        params.insert("destination".to_string(), json!(destination.display().to_string()));
        self.record("download_to", uri, params);
        Ok(())
    }
}

pub fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

/// A completed inbound call as returned by the service
pub fn call_fixture() -> Value {
    json!({
        "to": "+11111111111",
        "recordings": "https://api.catapult.inetwork.com/v1/users/recordings",
        "transcriptionEnabled": false,
        "direction": "in",
        "events": "https://api.catapult.inetwork.com/v1/users/calls/events",
        "chargeableDuration": 300,
        "state": "completed",
        "from": "+22222222222",
        "endTime": "2014-08-12T10:22:54Z",
        "id": CALL_ID,
        "recordingEnabled": true,
        "startTime": "2014-08-12T10:17:54Z",
        "activeTime": "2014-08-12T10:17:54Z"
    })
}

/// The fixture call while it is still connected
pub fn active_call_fixture() -> Value {
    let mut call = call_fixture();
    call["state"] = json!("active");
    call
}

pub fn event_fixture() -> Value {
    json!({
        "id": "ce-hsdbdbdhd",
        "time": 1407916959116_i64,
        "name": "error",
        "data": "Call Id wasn't found anymore"
    })
}
