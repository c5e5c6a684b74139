use std::sync::Arc;

use rest_client::{text_value, Params, Transport};
use serde_json::Value;

use super::{send, CommandParams};
use crate::resource::{fetch_entity, Resource};
use crate::resources::{Bridge, Call};
use crate::{ApiError, Result};

pub(crate) const CALLS: &str = "calls";
pub(crate) const BRIDGES: &str = "bridges";

/// Identifier of a freshly created entity, taken from the write response
fn created_id(response: Option<Value>, collection_uri: &str) -> Result<String> {
    let id = response
        .as_ref()
        .and_then(|body| body.get("id"))
        .filter(|id| !id.is_null())
        .map(text_value);

    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => {
            tracing::warn!("Creation response from {} carried no identifier", collection_uri);
            Err(ApiError::MissingIdentifier { field: "id" })
        }
    }
}

/// Creates an entity in `collection_uri` and reads it back
fn create_in<R: Resource>(
    transport: &Arc<dyn Transport>,
    collection_uri: &str,
    body: &Params,
) -> Result<R> {
    let response = send(transport, collection_uri, body)?;
    let id = created_id(response, collection_uri)?;
    tracing::info!("Created {}/{}", collection_uri, id);
    fetch_entity(transport, collection_uri, &id)
}

/// Places an outbound call
///
/// ```rust,ignore
/// let call = client
///     .new_call("+15551112222", "+15553334444")
///     .callback_url("https://example.com/events")
///     .recording_enabled(true)
///     .create()?;
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until create() is called"]
pub struct NewCallBuilder {
    transport: Arc<dyn Transport>,
    params: CommandParams,
}

impl NewCallBuilder {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let mut params = CommandParams::new();
        params.set_text("from", from);
        params.set_text("to", to);
        Self { transport, params }
    }

    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.params.set_text("callbackUrl", callback_url);
        self
    }

    pub fn recording_enabled(mut self, enabled: bool) -> Self {
        self.params.set_flag("recordingEnabled", enabled);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.params.set_text("tag", tag);
        self
    }

    /// Join the call to an existing bridge once it is answered
    pub fn bridge_id(mut self, bridge_id: impl Into<String>) -> Self {
        self.params.set_text("bridgeId", bridge_id);
        self
    }

    pub fn body(&self) -> Params {
        self.params.as_map().clone()
    }

    /// Create the call, then read it back from `calls/{id}`
    pub fn create(self) -> Result<Call> {
        create_in(&self.transport, CALLS, self.params.as_map())
    }
}

/// Creates a bridge joining zero or more calls
///
/// ```rust,ignore
/// let bridge = client
///     .new_bridge()
///     .bridge_audio(true)
///     .add_call_id(first.id().unwrap_or_default())
///     .add_call_id(second.id().unwrap_or_default())
///     .create()?;
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until create() is called"]
pub struct NewBridgeBuilder {
    transport: Arc<dyn Transport>,
    bridge_audio: Option<bool>,
    call_ids: Vec<String>,
}

impl NewBridgeBuilder {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            bridge_audio: None,
            call_ids: Vec::new(),
        }
    }

    pub fn bridge_audio(mut self, bridge_audio: bool) -> Self {
        self.bridge_audio = Some(bridge_audio);
        self
    }

    /// Add a call to the bridge; ids accumulate in order
    pub fn add_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_ids.push(call_id.into());
        self
    }

    pub fn body(&self) -> Params {
        let mut params = CommandParams::new();
        if let Some(bridge_audio) = self.bridge_audio {
            params.set_flag("bridgeAudio", bridge_audio);
        }
        if !self.call_ids.is_empty() {
            params.set_list("callIds", &self.call_ids);
        }
        params.into_map()
    }

    /// Create the bridge, then read it back from `bridges/{id}`
    pub fn create(self) -> Result<Bridge> {
        create_in(&self.transport, BRIDGES, &self.body())
    }
}
