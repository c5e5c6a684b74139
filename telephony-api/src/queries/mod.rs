//! Read-only queries returning plain value objects
//!
//! Unlike resources, query results have no addressable sub-resources, so they
//! are decoded straight into serde structs.

pub mod account;
pub mod numbers;

pub use account::{AccountInfo, AccountTransaction, TransactionsQueryBuilder};
pub use numbers::{AvailableNumber, LocalNumbersQuery, TollFreeNumbersQuery};

use std::sync::Arc;

use rest_client::{text_value, Params, Transport};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{ApiError, Result};

/// Decode one response value, reporting failures against `context`
pub(crate) fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| ApiError::malformed(context, value, e.to_string()))
}

/// Read a collection and decode every element
pub(crate) fn fetch_values<T: DeserializeOwned>(
    transport: &Arc<dyn Transport>,
    uri: &str,
    query: &Params,
) -> Result<Vec<T>> {
    tracing::debug!("Querying {} ({} parameters)", uri, query.len());
    transport
        .read_collection(uri, query)?
        .into_iter()
        .map(|item| decode(item, uri))
        .collect()
}

/// Accept either a JSON string or a scalar for a textual field
///
/// The service is inconsistent about quoting amounts and counts.
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "deserialize_text")]
/// pub price: Option<String>,
/// ```
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()).map(|v| text_value(&v)))
}
