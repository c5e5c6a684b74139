use chrono::{DateTime, Utc};

use crate::property::DateFormat;
use crate::resource::define_resource;
use crate::Result;

define_resource! {
    /// Audio recorded from a call
    Recording
}

impl Recording {
    /// URL of the recorded media file
    pub fn media(&self) -> Option<String> {
        self.props().get_string("media")
    }

    /// URL of the recorded call
    pub fn call(&self) -> Option<String> {
        self.props().get_string("call")
    }

    pub fn state(&self) -> Option<String> {
        self.props().get_string("state")
    }

    pub fn start_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("startTime", &DateFormat::ISO_8601_UTC)
    }

    pub fn end_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("endTime", &DateFormat::ISO_8601_UTC)
    }
}
