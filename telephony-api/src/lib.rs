//! Client-side resource model for a telephony control REST API
//!
//! Remote entities (calls, bridges, events, recordings, gather results and
//! media files) are represented as typed views over a generic JSON payload.
//! Typed accessors coerce fields on access: absent fields read as `None`
//! (flags as `false`), present but malformed ones fail with
//! [`ApiError::MalformedData`].
//!
//! Commands are issued through single-use fluent builders. State-changing
//! commands on a call write the desired `state` and then re-read the call,
//! so local state always mirrors what the service confirmed:
//!
//! ```rust,ignore
//! use telephony_api::{TelephonyClient, Gender};
//!
//! let client = TelephonyClient::from_env()?;
//! let call = client.new_call("+15551112222", "+15553334444").create()?;
//!
//! call.audio()?.sentence("Hello").gender(Gender::Female).create()?;
//! call.gather_builder()?.max_digits(1).prompt_sentence("Press 1").create()?;
//! call.transfer("+15557778888")?.whisper_sentence("Transferred call").create()?;
//!
//! println!("state: {:?}", call.state());
//! ```
//!
//! The HTTP layer lives in the `rest-client` crate behind the
//! [`Transport`] trait, so any transport (including an in-memory one) can
//! back the resource model.

pub mod locator;
pub mod property;

mod resource;

pub mod client;
pub mod commands;
pub mod error;
pub mod logging;
pub mod queries;
pub mod resources;

pub use client::TelephonyClient;
pub use commands::{
    AudioBuilder, CommandParams, Gender, GatherBuilder, NewBridgeBuilder, NewCallBuilder,
    SentenceLocale, TransferBuilder,
};
pub use error::{ApiError, Result};
pub use property::{DateFormat, Payload, PropertyStore};
pub use queries::{
    AccountInfo, AccountTransaction, AvailableNumber, LocalNumbersQuery, TollFreeNumbersQuery,
    TransactionsQueryBuilder,
};
pub use resource::{Resource, ResourceNode};
pub use resources::{Bridge, Call, CallTransition, Event, GatherResult, MediaFile, Recording};

pub use rest_client::{Params, RestClientConfig, RestError, Transport};
