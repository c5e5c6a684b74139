use std::sync::Arc;

use rest_client::Transport;
use serde::{Deserialize, Serialize};

use super::{deserialize_text, fetch_values};
use crate::commands::CommandParams;
use crate::Result;

const LOCAL: &str = "availableNumbers/local";
const TOLL_FREE: &str = "availableNumbers/tollFree";

/// A phone number that can be ordered
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableNumber {
    pub number: String,
    #[serde(default)]
    pub national_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub price: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub rate_center: Option<String>,
}

/// Searches local numbers by location or pattern
///
/// ```rust,ignore
/// let numbers = client.local_numbers().area_code("919").quantity(3).list()?;
/// ```
#[derive(Debug)]
#[must_use = "queries do nothing until list() is called"]
pub struct LocalNumbersQuery {
    transport: Arc<dyn Transport>,
    params: CommandParams,
}

impl LocalNumbersQuery {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            params: CommandParams::new(),
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.params.set_text("city", city);
        self
    }

    /// Two-letter state code
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.params.set_text("state", state);
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.params.set_text("zip", zip);
        self
    }

    pub fn area_code(mut self, area_code: impl Into<String>) -> Self {
        self.params.set_text("areaCode", area_code);
        self
    }

    /// First digits of the number after the area code
    pub fn local_number(mut self, local_number: impl Into<String>) -> Self {
        self.params.set_text("localNumber", local_number);
        self
    }

    pub fn in_local_calling_area(mut self, in_local_calling_area: bool) -> Self {
        self.params.set_flag("inLocalCallingArea", in_local_calling_area);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.params.set_number("quantity", quantity);
        self
    }

    pub fn params(&self) -> &CommandParams {
        &self.params
    }

    pub fn list(self) -> Result<Vec<AvailableNumber>> {
        fetch_values(&self.transport, LOCAL, self.params.as_map())
    }
}

/// Searches toll-free numbers
#[derive(Debug)]
#[must_use = "queries do nothing until list() is called"]
pub struct TollFreeNumbersQuery {
    transport: Arc<dyn Transport>,
    params: CommandParams,
}

impl TollFreeNumbersQuery {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            params: CommandParams::new(),
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.params.set_number("quantity", quantity);
        self
    }

    /// Wildcard pattern, e.g. `*456`
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.params.set_text("pattern", pattern);
        self
    }

    pub fn params(&self) -> &CommandParams {
        &self.params
    }

    pub fn list(self) -> Result<Vec<AvailableNumber>> {
        fetch_values(&self.transport, TOLL_FREE, self.params.as_map())
    }
}
