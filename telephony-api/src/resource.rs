//! Resource nodes: client-side proxies for remote entities
//!
//! A [`ResourceNode`] couples a [`PropertyStore`] with the transport and the
//! URI of the collection the entity lives in. Its own URI is derived as
//! `{parent_uri}/{identifier}`, so it is only addressable once the payload
//! carries an identifier.
//!
//! Children are always parented on their collection URI, whether they were
//! listed (`fetch_children`) or fetched one by one (`fetch_child`), so
//! further nesting composes the same way in both cases.

use std::sync::Arc;

use rest_client::{Params, Transport};

use crate::locator::join;
use crate::property::{into_payload, Payload, PropertyStore};
use crate::{ApiError, Result};

/// Typed view over a [`ResourceNode`]
///
/// Implemented by every entity type so collection helpers can be generic.
pub trait Resource: Sized {
    /// Payload field holding the entity identifier
    const ID_FIELD: &'static str = "id";

    /// Wrap an untyped node
    fn from_node(node: ResourceNode) -> Self;

    /// The underlying node
    fn node(&self) -> &ResourceNode;

    fn id(&self) -> Option<String> {
        self.node().id()
    }

    fn uri(&self) -> Result<String> {
        self.node().uri()
    }

    /// Re-read the entity and replace its local state
    fn refresh(&self) -> Result<()> {
        self.node().refresh()
    }
}

/// An entity bound to a property store and a resolvable URI
#[derive(Debug, Clone)]
pub struct ResourceNode {
    transport: Arc<dyn Transport>,
    parent_uri: String,
    id_field: &'static str,
    properties: PropertyStore,
}

impl Resource for ResourceNode {
    fn from_node(node: ResourceNode) -> Self {
        node
    }

    fn node(&self) -> &ResourceNode {
        self
    }
}

impl ResourceNode {
    pub fn new(
        transport: Arc<dyn Transport>,
        parent_uri: impl Into<String>,
        payload: Payload,
        id_field: &'static str,
    ) -> Self {
        Self {
            transport,
            parent_uri: parent_uri.into(),
            id_field,
            properties: PropertyStore::new(payload),
        }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn parent_uri(&self) -> &str {
        &self.parent_uri
    }

    pub fn id_field(&self) -> &'static str {
        self.id_field
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub fn id(&self) -> Option<String> {
        self.properties.get_string(self.id_field)
    }

    /// `{parent_uri}/{id}`
    pub fn uri(&self) -> Result<String> {
        let id = self.id().ok_or(ApiError::MissingIdentifier {
            field: self.id_field,
        })?;
        Ok(join(&self.parent_uri, [id]))
    }

    /// URI of a nested sub-resource, e.g. `{uri}/events/{event_id}`
    pub fn sub_uri<I, S>(&self, segments: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(join(&self.uri()?, segments))
    }

    /// List a nested collection, e.g. the events of a call
    pub fn fetch_children<R: Resource>(&self, segment: &str) -> Result<Vec<R>> {
        let collection_uri = self.sub_uri([segment])?;
        fetch_collection(&self.transport, &collection_uri, &Params::new())
    }

    /// Fetch one element of a nested collection by id
    pub fn fetch_child<R: Resource>(&self, segment: &str, id: &str) -> Result<R> {
        let collection_uri = self.sub_uri([segment])?;
        fetch_entity(&self.transport, &collection_uri, id)
    }

    /// Re-read this entity's own URI and replace the local payload
    pub fn refresh(&self) -> Result<()> {
        let uri = self.uri()?;
        self.refresh_from(&uri)
    }

    /// Re-read `uri` and replace the local payload with the response
    ///
    /// The store is left untouched if the read fails.
    pub fn refresh_from(&self, uri: &str) -> Result<()> {
        tracing::debug!("Refreshing {}", uri);
        let payload = into_payload(self.transport.read(uri)?, uri)?;
        self.properties.replace(payload);
        Ok(())
    }
}

/// Read a collection and wrap every element as a resource parented on it
pub(crate) fn fetch_collection<R: Resource>(
    transport: &Arc<dyn Transport>,
    collection_uri: &str,
    query: &Params,
) -> Result<Vec<R>> {
    fetch_collection_into(transport, collection_uri, collection_uri, query)
}

/// Read `collection_uri` but parent every element on `parent_uri`
///
/// For membership listings (e.g. the calls on a bridge) whose elements live
/// in another top-level collection.
pub(crate) fn fetch_collection_into<R: Resource>(
    transport: &Arc<dyn Transport>,
    collection_uri: &str,
    parent_uri: &str,
    query: &Params,
) -> Result<Vec<R>> {
    let items = transport.read_collection(collection_uri, query)?;
    tracing::debug!("Fetched {} items from {}", items.len(), collection_uri);

    items
        .into_iter()
        .map(|item| {
            let payload = into_payload(item, collection_uri)?;
            Ok(wrap(transport, parent_uri, payload))
        })
        .collect()
}

/// Read `{collection_uri}/{id}` and wrap it as a resource parented on the collection
pub(crate) fn fetch_entity<R: Resource>(
    transport: &Arc<dyn Transport>,
    collection_uri: &str,
    id: &str,
) -> Result<R> {
    let uri = join(collection_uri, [id]);
    let payload = into_payload(transport.read(&uri)?, &uri)?;
    Ok(wrap(transport, collection_uri, payload))
}

pub(crate) fn wrap<R: Resource>(
    transport: &Arc<dyn Transport>,
    parent_uri: &str,
    payload: Payload,
) -> R {
    R::from_node(ResourceNode::new(
        Arc::clone(transport),
        parent_uri,
        payload,
        R::ID_FIELD,
    ))
}

/// Declare a resource type backed by a [`ResourceNode`]
macro_rules! define_resource {
    (
        $(#[$meta:meta])*
        $name:ident $(, id_field: $field:literal)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            node: $crate::resource::ResourceNode,
        }

        impl $crate::resource::Resource for $name {
            $(const ID_FIELD: &'static str = $field;)?

            fn from_node(node: $crate::resource::ResourceNode) -> Self {
                Self { node }
            }

            fn node(&self) -> &$crate::resource::ResourceNode {
                &self.node
            }
        }

        impl $name {
            fn props(&self) -> &$crate::property::PropertyStore {
                self.node.properties()
            }
        }
    };
}

pub(crate) use define_resource;

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::RestError;
    use serde_json::{json, Value};
    use std::path::Path;

    /// Transport that fails every call; for tests that must not touch the network
    #[derive(Debug)]
    struct Offline;

    impl Transport for Offline {
        fn read(&self, uri: &str) -> std::result::Result<Value, RestError> {
            Err(RestError::Network(format!("offline: {}", uri)))
        }
        fn read_collection(&self, uri: &str, _: &Params) -> std::result::Result<Vec<Value>, RestError> {
            Err(RestError::Network(format!("offline: {}", uri)))
        }
        fn write(&self, uri: &str, _: &Params) -> std::result::Result<Option<Value>, RestError> {
            Err(RestError::Network(format!("offline: {}", uri)))
        }
        fn delete(&self, uri: &str) -> std::result::Result<(), RestError> {
            Err(RestError::Network(format!("offline: {}", uri)))
        }
        fn download_to(&self, uri: &str, _: &Path) -> std::result::Result<(), RestError> {
            Err(RestError::Network(format!("offline: {}", uri)))
        }
    }

    fn node(payload: Value, id_field: &'static str) -> ResourceNode {
        let payload = match payload {
            Value::Object(map) => map,
            _ => panic!("object expected"),
        };
        ResourceNode::new(Arc::new(Offline), "parentUri", payload, id_field)
    }

    #[test]
    fn test_uri_from_identifier() {
        let n = node(json!({"id": "c-1"}), "id");
        assert_eq!(n.uri().unwrap(), "parentUri/c-1");
        assert_eq!(n.sub_uri(["events", "e-1"]).unwrap(), "parentUri/c-1/events/e-1");
    }

    #[test]
    fn test_uri_uses_configured_id_field() {
        let n = node(json!({"mediaName": "{mediaName1}", "id": "ignored"}), "mediaName");
        assert_eq!(n.uri().unwrap(), "parentUri/{mediaName1}");
    }

    #[test]
    fn test_missing_identifier() {
        let n = node(json!({"sentence": "embedded"}), "id");
        assert!(n.id().is_none());
        assert!(matches!(n.uri(), Err(ApiError::MissingIdentifier { field: "id" })));
        assert!(matches!(
            n.fetch_children::<ResourceNode>("events"),
            Err(ApiError::MissingIdentifier { .. })
        ));
    }

    #[test]
    fn test_failed_refresh_keeps_state() {
        let n = node(json!({"id": "c-1", "state": "active"}), "id");
        assert!(matches!(n.refresh(), Err(ApiError::Transport(_))));
        assert_eq!(n.properties().get_string("state"), Some("active".to_string()));
    }
}
