//! Command builders
//!
//! Every builder follows the same protocol:
//! - it is created by a resource method, which fixes the target URI,
//! - chained setters accumulate parameters (last write wins per field),
//! - `create()` consumes the builder and issues exactly one write.
//!
//! Because `create()` takes the builder by value, a builder cannot be sent
//! twice. Commands that change the state of the owning entity (transfer,
//! hang up, answer, reject, recording toggles) re-read the entity right
//! after the write; playback, DTMF and gather commands do not.
//!
//! All scalar parameters are stored in their textual form, which is what the
//! service expects on the wire.

mod audio;
mod create;
mod gather;
mod transfer;

pub use audio::{AudioBuilder, Gender, SentenceLocale};
pub use create::{NewBridgeBuilder, NewCallBuilder};
pub(crate) use create::{BRIDGES, CALLS};
pub use gather::GatherBuilder;
pub use transfer::TransferBuilder;

use std::fmt::Display;
use std::sync::Arc;

use rest_client::{Params, Transport};
use serde_json::Value;

use crate::resource::ResourceNode;
use crate::Result;

/// Accumulating parameter mapping used by command and query builders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandParams(Params);

impl CommandParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), Value::String(value.into()));
    }

    /// Store a flag as `"true"` / `"false"`
    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.set_text(key, value.to_string());
    }

    /// Store a number in its textual form
    pub fn set_number(&mut self, key: &str, value: impl Display) {
        self.set_text(key, value.to_string());
    }

    pub fn set_list(&mut self, key: &str, values: &[String]) {
        let items = values.iter().cloned().map(Value::String).collect();
        self.0.insert(key.to_string(), Value::Array(items));
    }

    /// Nest a parameter group under `key`; empty groups are left out
    pub fn set_group(&mut self, key: &str, group: CommandParams) {
        if !group.is_empty() {
            self.0.insert(key.to_string(), Value::Object(group.0));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_map(&self) -> &Params {
        &self.0
    }

    pub fn into_map(self) -> Params {
        self.0
    }
}

impl From<CommandParams> for Params {
    fn from(params: CommandParams) -> Self {
        params.0
    }
}

/// Issue one write; the response body is discarded by all callers but creation
pub(crate) fn send(
    transport: &Arc<dyn Transport>,
    uri: &str,
    body: &Params,
) -> Result<Option<Value>> {
    tracing::debug!("Sending command to {} ({} parameters)", uri, body.len());
    Ok(transport.write(uri, body)?)
}

/// Write to the entity's own URI, then replace its state with a fresh read
///
/// If the write succeeds and the read fails, the node keeps its pre-command
/// state and the read error is returned.
pub(crate) fn send_transition(node: &ResourceNode, uri: &str, body: &Params) -> Result<()> {
    send(node.transport(), uri, body)?;
    node.refresh_from(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_are_textual() {
        let mut params = CommandParams::new();
        params.set_number("maxDigits", 5);
        params.set_flag("suppressDtmf", false);
        params.set_text("tag", "menu");

        assert_eq!(params.get_str("maxDigits"), Some("5"));
        assert_eq!(params.get_str("suppressDtmf"), Some("false"));
        assert_eq!(params.get_str("tag"), Some("menu"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut params = CommandParams::new();
        params.set_text("sentence", "first");
        params.set_text("sentence", "second");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get_str("sentence"), Some("second"));
    }

    #[test]
    fn test_empty_group_is_omitted() {
        let mut params = CommandParams::new();
        params.set_group("prompt", CommandParams::new());
        assert!(params.get("prompt").is_none());

        let mut prompt = CommandParams::new();
        prompt.set_text("sentence", "Hello");
        params.set_group("prompt", prompt);
        assert_eq!(params.get("prompt"), Some(&json!({"sentence": "Hello"})));
    }

    #[test]
    fn test_list_parameter() {
        let mut params = CommandParams::new();
        params.set_list("callIds", &["c-1".to_string(), "c-2".to_string()]);
        assert_eq!(params.get("callIds"), Some(&json!(["c-1", "c-2"])));
    }
}
