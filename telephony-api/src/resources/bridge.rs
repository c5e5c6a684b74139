use std::sync::Arc;

use chrono::{DateTime, Utc};
use rest_client::Params;

use crate::commands::{AudioBuilder, CALLS as CALL_COLLECTION};
use crate::property::DateFormat;
use crate::resource::{define_resource, fetch_collection_into};
use crate::resources::Call;
use crate::Result;

const CALLS: &str = "calls";
const AUDIO: &str = "audio";

define_resource! {
    /// Connects two or more calls so their audio is shared
    Bridge
}

impl Bridge {
    pub fn state(&self) -> Option<String> {
        self.props().get_string("state")
    }

    /// Whether audio flows between the bridged calls
    pub fn is_bridge_audio(&self) -> bool {
        self.props().get_boolean("bridgeAudio")
    }

    /// URL of the bridged calls collection
    pub fn calls_url(&self) -> Option<String> {
        self.props().get_string("calls")
    }

    pub fn created_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("createdTime", &DateFormat::ISO_8601_UTC)
    }

    pub fn activated_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("activatedTime", &DateFormat::ISO_8601_UTC)
    }

    pub fn completed_time(&self) -> Result<Option<DateTime<Utc>>> {
        self.props().get_date("completedTime", &DateFormat::ISO_8601_UTC)
    }

    /// Calls currently on the bridge
    ///
    /// The listing is read from `{bridge}/calls`, but each call is addressed
    /// through the top-level `calls` collection, so commands on it reach the
    /// call itself.
    pub fn calls(&self) -> Result<Vec<Call>> {
        let listing_uri = self.node.sub_uri([CALLS])?;
        fetch_collection_into(self.node.transport(), &listing_uri, CALL_COLLECTION, &Params::new())
    }

    /// Play a file or speak a sentence to every call on the bridge
    pub fn audio(&self) -> Result<AudioBuilder> {
        Ok(AudioBuilder::new(
            Arc::clone(self.node.transport()),
            self.node.sub_uri([AUDIO])?,
        ))
    }
}
