use chrono::{DateTime, Utc};

use crate::property::DateFormat;
use crate::resource::define_resource;
use crate::Result;

define_resource! {
    /// Outcome of a DTMF gather on a call
    ///
    /// Read while the gather is running, `state` is still `created` and
    /// `digits` may be missing.
    GatherResult
}

impl GatherResult {
    pub fn state(&self) -> Option<String> {
        self.props().get_string("state")
    }

    /// Why the gather ended, e.g. `max-digits` or `inter-digit-timeout`
    pub fn reason(&self) -> Option<String> {
        self.props().get_string("reason")
    }

    pub fn digits(&self) -> Option<String> {
        self.props().get_string("digits")
    }

    /// URL of the call the digits were collected on
    pub fn call(&self) -> Option<String> {
        self.props().get_string("call")
    }

    pub fn created_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("createdTime", &DateFormat::ISO_8601_UTC)
    }

    pub fn completed_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("completedTime", &DateFormat::ISO_8601_UTC)
    }
}
