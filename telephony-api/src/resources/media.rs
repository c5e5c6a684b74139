use std::path::Path;
use std::sync::Arc;

use rest_client::Transport;
use serde_json::Value;

use crate::property::Payload;
use crate::resource::{define_resource, Resource, ResourceNode};
use crate::Result;

define_resource! {
    /// A media file stored with the service, addressed by its name
    MediaFile, id_field: "mediaName"
}

impl MediaFile {
    /// Address a stored file by name without reading anything
    ///
    /// `{parent}/{name}` serves the file content itself, so there is no
    /// metadata to fetch; size and content URL are only known from a listing.
    pub fn with_name(transport: Arc<dyn Transport>, parent_uri: impl Into<String>, media_name: impl Into<String>) -> Self {
        let mut payload = Payload::new();
        payload.insert(Self::ID_FIELD.to_string(), Value::String(media_name.into()));
        Self::from_node(ResourceNode::new(transport, parent_uri, payload, Self::ID_FIELD))
    }

    pub fn media_name(&self) -> Option<String> {
        self.id()
    }

    /// Size in bytes
    pub fn content_length(&self) -> Result<Option<i64>> {
        self.props().get_long("contentLength")
    }

    /// Download URL of the file content
    pub fn content(&self) -> Option<String> {
        self.props().get_string("content")
    }

    /// Download the file content into `destination`
    pub fn download_to(&self, destination: impl AsRef<Path>) -> Result<()> {
        let uri = self.uri()?;
        let destination = destination.as_ref();
        tracing::debug!("Downloading {} to {}", uri, destination.display());
        self.node.transport().download_to(&uri, destination)?;
        Ok(())
    }

    /// Remove the file from the service
    pub fn delete(&self) -> Result<()> {
        let uri = self.uri()?;
        tracing::info!("Deleting {}", uri);
        self.node.transport().delete(&uri)?;
        Ok(())
    }
}
