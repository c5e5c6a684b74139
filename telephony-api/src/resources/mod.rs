//! Remote entities exposed by the telephony service
//!
//! Each type is a thin typed view over a [`ResourceNode`](crate::ResourceNode).
//! Accessors read from the node's property store at call time, so values
//! always reflect the last successful read.

pub mod bridge;
pub mod call;
pub mod event;
pub mod gather;
pub mod media;
pub mod recording;

pub use bridge::Bridge;
pub use call::{Call, CallTransition};
pub use event::Event;
pub use gather::GatherResult;
pub use media::MediaFile;
pub use recording::Recording;
