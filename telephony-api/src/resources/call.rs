//! Calls and the transitions the client can request on them
//!
//! Every transition is expressed the same way: write the desired `state`
//! (plus any extra settings) to the call's own URI, then read the call back.
//! No local precondition is checked; the service decides whether a
//! transition is legal and reports refusals as a transport fault.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rest_client::Transport;
use serde_json::Value;

use crate::commands::{send, send_transition, AudioBuilder, CommandParams, GatherBuilder, TransferBuilder};
use crate::property::{DateFormat, Payload};
use crate::resource::{define_resource, Resource, ResourceNode};
use crate::resources::{Event, GatherResult, Recording};
use crate::Result;

const EVENTS: &str = "events";
const RECORDINGS: &str = "recordings";
const GATHER: &str = "gather";
const AUDIO: &str = "audio";
const DTMF: &str = "dtmf";

/// Call states the client itself asks for
///
/// Observed states are reported by the service as plain strings (see
/// [`Call::state`]); this enum only covers the values written by
/// transition commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallTransition {
    Completed,
    Active,
    Rejected,
    Transferring,
}

impl CallTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallTransition::Completed => "completed",
            CallTransition::Active => "active",
            CallTransition::Rejected => "rejected",
            CallTransition::Transferring => "transferring",
        }
    }
}

impl fmt::Display for CallTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

define_resource! {
    /// A phone call
    ///
    /// ```rust,ignore
    /// let call = client.call("c-abc")?;
    /// call.answer_on_incoming()?;
    /// call.audio()?.sentence("Please hold").create()?;
    /// call.hang_up()?;
    /// assert_eq!(call.state().as_deref(), Some("completed"));
    /// ```
    Call
}

impl Call {
    /// Synthesize a call from its identifier alone, without reading it
    ///
    /// Useful to address sub-resources (events, recordings, gathers) cheaply.
    /// Accessors other than `id` return nothing until `refresh` is called.
    pub fn with_id(transport: Arc<dyn Transport>, parent_uri: impl Into<String>, id: impl Into<String>) -> Self {
        let mut payload = Payload::new();
        payload.insert(Self::ID_FIELD.to_string(), Value::String(id.into()));
        Self::from_node(ResourceNode::new(transport, parent_uri, payload, Self::ID_FIELD))
    }

    /// `in` or `out`
    pub fn direction(&self) -> Option<String> {
        self.props().get_string("direction")
    }

    /// Current state as reported by the service, e.g. `active`
    pub fn state(&self) -> Option<String> {
        self.props().get_string("state")
    }

    pub fn from(&self) -> Option<String> {
        self.props().get_string("from")
    }

    pub fn to(&self) -> Option<String> {
        self.props().get_string("to")
    }

    pub fn callback_url(&self) -> Option<String> {
        self.props().get_string("callbackUrl")
    }

    /// URL of the call's event collection
    pub fn events_url(&self) -> Option<String> {
        self.props().get_string("events")
    }

    pub fn start_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("startTime", &DateFormat::ISO_8601_UTC)
    }

    pub fn active_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("activeTime", &DateFormat::ISO_8601_UTC)
    }

    pub fn end_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("endTime", &DateFormat::ISO_8601_UTC)
    }

    /// Billable duration in seconds
    pub fn chargeable_duration(&self) -> Result<Option<i64>> {
        self.props().get_long("chargeableDuration")
    }

    pub fn is_recording_enabled(&self) -> bool {
        self.props().get_boolean("recordingEnabled")
    }

    pub fn recordings(&self) -> Result<Vec<Recording>> {
        self.node.fetch_children(RECORDINGS)
    }

    pub fn events(&self) -> Result<Vec<Event>> {
        self.node.fetch_children(EVENTS)
    }

    pub fn event(&self, event_id: &str) -> Result<Event> {
        self.node.fetch_child(EVENTS, event_id)
    }

    /// Poll the result of a gather started with [`gather_builder`](Self::gather_builder)
    pub fn gather(&self, gather_id: &str) -> Result<GatherResult> {
        self.node.fetch_child(GATHER, gather_id)
    }

    pub fn hang_up(&self) -> Result<()> {
        self.transition(CallTransition::Completed)
    }

    pub fn answer_on_incoming(&self) -> Result<()> {
        self.transition(CallTransition::Active)
    }

    pub fn reject_incoming(&self) -> Result<()> {
        self.transition(CallTransition::Rejected)
    }

    pub fn recording_on(&self) -> Result<()> {
        self.set_recording(true)
    }

    pub fn recording_off(&self) -> Result<()> {
        self.set_recording(false)
    }

    /// Start a transfer to `transfer_to`
    pub fn transfer(&self, transfer_to: impl Into<String>) -> Result<TransferBuilder<'_>> {
        Ok(TransferBuilder::new(&self.node, self.node.uri()?, transfer_to))
    }

    /// Play a file or speak a sentence on the call
    pub fn audio(&self) -> Result<AudioBuilder> {
        Ok(AudioBuilder::new(
            Arc::clone(self.node.transport()),
            self.node.sub_uri([AUDIO])?,
        ))
    }

    /// Stop the file currently playing, by sending an empty file URL
    pub fn stop_audio_file_playing(&self) -> Result<()> {
        self.audio()?.file_url("").create()
    }

    /// Stop the sentence currently spoken, by sending an empty sentence
    pub fn stop_sentence(&self) -> Result<()> {
        self.audio()?.sentence("").create()
    }

    /// Send DTMF digits to the call
    pub fn send_dtmf(&self, digits: impl Into<String>) -> Result<()> {
        let uri = self.node.sub_uri([DTMF])?;
        let mut params = CommandParams::new();
        params.set_text("dtmfOut", digits);
        send(self.node.transport(), &uri, params.as_map())?;
        Ok(())
    }

    /// Start collecting DTMF digits
    pub fn gather_builder(&self) -> Result<GatherBuilder> {
        Ok(GatherBuilder::new(
            Arc::clone(self.node.transport()),
            self.node.sub_uri([GATHER])?,
        ))
    }

    fn transition(&self, state: CallTransition) -> Result<()> {
        let uri = self.node.uri()?;
        tracing::info!("Requesting state {} for {}", state, uri);
        let mut params = CommandParams::new();
        params.set_text("state", state.as_str());
        send_transition(&self.node, &uri, params.as_map())
    }

    fn set_recording(&self, enabled: bool) -> Result<()> {
        let uri = self.node.uri()?;
        tracing::info!("Setting recording {} for {}", if enabled { "on" } else { "off" }, uri);
        let mut params = CommandParams::new();
        params.set_flag("recordingEnabled", enabled);
        send_transition(&self.node, &uri, params.as_map())
    }
}
