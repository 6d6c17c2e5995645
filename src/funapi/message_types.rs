// Funapi Message Types
// Generated from pong_messages.proto and the funapi framework messages.

use std::fmt;
use std::str::FromStr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::shapes::{self, MessageShape};
use crate::error::MessageTableError;

/// Top-level tag of a message envelope. Tag values are part of the wire contract.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromPrimitive,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(i32)]
pub enum MessageType {
    /// FunMulticastMessage
    Multicast = 8,
    /// FunPingMessage
    CsPing = 9,
    /// MaintenanceMessage
    PbufMaintenance = 15,
    /// PbufEchoMessage
    PbufEcho = 16,
    /// PbufAnotherMessage
    PbufAnother = 17,
}

/// Tag of a message nested inside a multicast envelope.
///
/// Shares tag values with [`MessageType`] but is an unrelated namespace.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromPrimitive,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(i32)]
pub enum MulticastMessageType {
    /// FunChatMessage
    Chat = 8,
    /// PbufHelloMessage
    PbufHello = 9,
}

impl MessageType {
    /// Every declared message type, in tag order.
    pub const ALL: [MessageType; 5] = [
        MessageType::Multicast,
        MessageType::CsPing,
        MessageType::PbufMaintenance,
        MessageType::PbufEcho,
        MessageType::PbufAnother,
    ];

    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        message_type_name(self)
    }

    pub fn shape(self) -> &'static MessageShape {
        match self {
            MessageType::Multicast => &shapes::FUN_MULTICAST_MESSAGE,
            MessageType::CsPing => &shapes::FUN_PING_MESSAGE,
            MessageType::PbufMaintenance => &shapes::MAINTENANCE_MESSAGE,
            MessageType::PbufEcho => &shapes::PBUF_ECHO_MESSAGE,
            MessageType::PbufAnother => &shapes::PBUF_ANOTHER_MESSAGE,
        }
    }
}

impl MulticastMessageType {
    /// Every declared multicast message type, in tag order.
    pub const ALL: [MulticastMessageType; 2] =
        [MulticastMessageType::Chat, MulticastMessageType::PbufHello];

    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        multicast_message_type_name(self)
    }
}

/// Convert message type to its canonical name
pub fn message_type_name(msg_type: MessageType) -> &'static str {
    match msg_type {
        MessageType::Multicast => "multicast",
        MessageType::CsPing => "cs_ping",
        MessageType::PbufMaintenance => "pbuf_maintenance",
        MessageType::PbufEcho => "pbuf_echo",
        MessageType::PbufAnother => "pbuf_another",
    }
}

/// Canonical name for a raw tag, or `""` when the tag is not a message type.
pub fn message_type_name_of(tag: i32) -> &'static str {
    MessageType::from_i32(tag).map_or("", message_type_name)
}

/// Shape descriptor of the message carried under `msg_type`.
pub fn message_shape(msg_type: MessageType) -> Option<&'static MessageShape> {
    Some(msg_type.shape())
}

/// Shape descriptor for a raw tag, or `None` when the tag is not a message type.
pub fn message_shape_of(tag: i32) -> Option<&'static MessageShape> {
    MessageType::from_i32(tag).and_then(message_shape)
}

/// Convert multicast message type to its canonical name
pub fn multicast_message_type_name(msg_type: MulticastMessageType) -> &'static str {
    match msg_type {
        MulticastMessageType::Chat => "chat",
        MulticastMessageType::PbufHello => "pbuf_hello",
    }
}

/// Canonical name for a raw multicast tag, or `""` when unknown.
pub fn multicast_message_type_name_of(tag: i32) -> &'static str {
    MulticastMessageType::from_i32(tag).map_or("", multicast_message_type_name)
}

impl TryFrom<i32> for MessageType {
    type Error = MessageTableError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        MessageType::from_i32(tag).ok_or(MessageTableError::UnknownMessageType(tag))
    }
}

impl TryFrom<i32> for MulticastMessageType {
    type Error = MessageTableError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        MulticastMessageType::from_i32(tag)
            .ok_or(MessageTableError::UnknownMulticastMessageType(tag))
    }
}

impl FromStr for MessageType {
    type Err = MessageTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| MessageTableError::UnknownName(s.to_string()))
    }
}

impl FromStr for MulticastMessageType {
    type Err = MessageTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MulticastMessageType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| MessageTableError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MulticastMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
