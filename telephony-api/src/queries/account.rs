use std::sync::Arc;

use chrono::{DateTime, Utc};
use rest_client::Transport;
use serde::{Deserialize, Serialize};

use super::{decode, deserialize_text, fetch_values};
use crate::commands::CommandParams;
use crate::property::DateFormat;
use crate::Result;

pub(crate) const ACCOUNT: &str = "account";
const TRANSACTIONS: &str = "account/transactions";

/// Account balance and type
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub balance: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
}

impl AccountInfo {
    pub(crate) fn fetch(transport: &Arc<dyn Transport>) -> Result<Self> {
        decode(transport.read(ACCOUNT)?, ACCOUNT)
    }
}

/// One charge or payment on the account
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransaction {
    pub id: String,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub amount: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub units: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// Lists account transactions, optionally filtered by date range and type
///
/// ```rust,ignore
/// let charges = client
///     .transactions()
///     .transaction_type("charge")
///     .max_items(100)
///     .list()?;
/// ```
#[derive(Debug)]
#[must_use = "queries do nothing until list() is called"]
pub struct TransactionsQueryBuilder {
    transport: Arc<dyn Transport>,
    params: CommandParams,
}

impl TransactionsQueryBuilder {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            params: CommandParams::new(),
        }
    }

    pub fn max_items(mut self, max_items: u32) -> Self {
        self.params.set_number("maxItems", max_items);
        self
    }

    pub fn from_date(mut self, from: DateTime<Utc>) -> Self {
        self.params.set_text("fromDate", DateFormat::TRANSACTION.format(&from));
        self
    }

    pub fn to_date(mut self, to: DateTime<Utc>) -> Self {
        self.params.set_text("toDate", DateFormat::TRANSACTION.format(&to));
        self
    }

    /// e.g. `charge`, `payment`, `credit`, `auto-recharge`
    pub fn transaction_type(mut self, kind: impl Into<String>) -> Self {
        self.params.set_text("type", kind);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.params.set_number("page", page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.params.set_number("size", size);
        self
    }

    pub fn params(&self) -> &CommandParams {
        &self.params
    }

    pub fn list(self) -> Result<Vec<AccountTransaction>> {
        fetch_values(&self.transport, TRANSACTIONS, self.params.as_map())
    }
}
