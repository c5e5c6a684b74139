use chrono::{DateTime, Utc};

use crate::resource::define_resource;
use crate::Result;

define_resource! {
    /// Something that happened on a call, e.g. `answer` or `hangup`
    Event
}

impl Event {
    pub fn name(&self) -> Option<String> {
        self.props().get_string("name")
    }

    /// Event-specific details
    pub fn data(&self) -> Option<String> {
        self.props().get_string("data")
    }

    /// When the event happened; the service reports milliseconds since the epoch
    pub fn time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_epoch_millis("time")
    }
}
