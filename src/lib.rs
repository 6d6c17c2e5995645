//! Static message type table for funapi clients.
//!
//! Maps the wire tags of top-level and multicast messages to their canonical
//! names and, for top-level messages, to the shape used to decode the body.

pub mod error;
pub mod fields;
pub mod funapi;
pub mod logger;

pub use error::MessageTableError;
pub use funapi::dispatch::{resolve, resolve_multicast, Resolved};
pub use funapi::message_types::*;
pub use funapi::messages::Message;
pub use funapi::shapes::MessageShape;
