use std::sync::Arc;

use rest_client::{Params, RestClient, RestClientConfig, Transport};

use crate::commands::{NewBridgeBuilder, NewCallBuilder, BRIDGES, CALLS};
use crate::queries::{AccountInfo, LocalNumbersQuery, TollFreeNumbersQuery, TransactionsQueryBuilder};
use crate::resource::{fetch_collection, fetch_entity};
use crate::resources::{Bridge, Call, MediaFile, Recording};
use crate::Result;

const RECORDINGS: &str = "recordings";
const MEDIA: &str = "media";

/// Entry point to the telephony resource model
///
/// Top-level collections are addressed relative to the transport's base URL
/// (`{endpoint}/{version}/users/{user_id}` for [`RestClient`]), so every
/// resource obtained here is parented on a short relative URI such as
/// `calls` or `bridges`.
///
/// ```rust,ignore
/// use telephony_api::TelephonyClient;
///
/// let client = TelephonyClient::from_env()?;
/// for call in client.calls()? {
///     println!("{:?} -> {:?}: {:?}", call.from(), call.to(), call.state());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TelephonyClient {
    transport: Arc<dyn Transport>,
}

impl TelephonyClient {
    /// Create a client over the HTTP transport
    pub fn new(config: &RestClientConfig) -> Self {
        Self::with_transport(Arc::new(RestClient::new(config)))
    }

    /// Create a client from `TELEPHONY_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = RestClientConfig::from_env()?;
        Ok(Self::new(&config))
    }

    /// Create a client over any transport, e.g. an in-memory one in tests
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn calls(&self) -> Result<Vec<Call>> {
        fetch_collection(&self.transport, CALLS, &Params::new())
    }

    pub fn call(&self, call_id: &str) -> Result<Call> {
        fetch_entity(&self.transport, CALLS, call_id)
    }

    /// A call addressed by id without reading it
    pub fn call_ref(&self, call_id: impl Into<String>) -> Call {
        Call::with_id(Arc::clone(&self.transport), CALLS, call_id)
    }

    pub fn new_call(&self, from: impl Into<String>, to: impl Into<String>) -> NewCallBuilder {
        NewCallBuilder::new(Arc::clone(&self.transport), from, to)
    }

    pub fn bridges(&self) -> Result<Vec<Bridge>> {
        fetch_collection(&self.transport, BRIDGES, &Params::new())
    }

    pub fn bridge(&self, bridge_id: &str) -> Result<Bridge> {
        fetch_entity(&self.transport, BRIDGES, bridge_id)
    }

    pub fn new_bridge(&self) -> NewBridgeBuilder {
        NewBridgeBuilder::new(Arc::clone(&self.transport))
    }

    pub fn recording(&self, recording_id: &str) -> Result<Recording> {
        fetch_entity(&self.transport, RECORDINGS, recording_id)
    }

    pub fn media_files(&self) -> Result<Vec<MediaFile>> {
        fetch_collection(&self.transport, MEDIA, &Params::new())
    }

    /// A stored media file addressed by name
    ///
    /// Nothing is read: the file's own URI serves its binary content, which
    /// is fetched with [`MediaFile::download_to`].
    pub fn media_file(&self, media_name: impl Into<String>) -> MediaFile {
        MediaFile::with_name(Arc::clone(&self.transport), MEDIA, media_name)
    }

    pub fn account_info(&self) -> Result<AccountInfo> {
        AccountInfo::fetch(&self.transport)
    }

    pub fn transactions(&self) -> TransactionsQueryBuilder {
        TransactionsQueryBuilder::new(Arc::clone(&self.transport))
    }

    pub fn local_numbers(&self) -> LocalNumbersQuery {
        LocalNumbersQuery::new(Arc::clone(&self.transport))
    }

    pub fn toll_free_numbers(&self) -> TollFreeNumbersQuery {
        TollFreeNumbersQuery::new(Arc::clone(&self.transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resource;

    #[test]
    fn test_call_ref_is_addressable() {
        let client = TelephonyClient::new(&RestClientConfig::new("u-1"));
        let call = client.call_ref("c-1");

        assert_eq!(call.uri().unwrap(), "calls/c-1");
        assert_eq!(call.audio().unwrap().uri(), "calls/c-1/audio");
    }
}
