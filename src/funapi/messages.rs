use serde::{Deserialize, Serialize};

use super::message_types::MessageType;
use super::shapes::MessageShape;

// Framework messages. Their bodies are encoded by the funapi runtime, so only
// the raw bytes are carried here.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FunMulticastMessage {
    pub body: Vec<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FunPingMessage {
    pub body: Vec<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceMessage {
    pub body: Vec<u8>,
}

// pong_messages.proto

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PbufEchoMessage {
    pub msg: String,
}

impl PbufEchoMessage {
    pub fn new(msg: impl Into<String>) -> PbufEchoMessage {
        PbufEchoMessage { msg: msg.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PbufAnotherMessage {
    pub msg: Option<String>,
}

/// A message value of one of the registered shapes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Multicast(FunMulticastMessage),
    Ping(FunPingMessage),
    Maintenance(MaintenanceMessage),
    Echo(PbufEchoMessage),
    Another(PbufAnotherMessage),
}

impl Message {
    pub fn message_type(&self) -> MessageType {
        match self {
            Message::Multicast(_) => MessageType::Multicast,
            Message::Ping(_) => MessageType::CsPing,
            Message::Maintenance(_) => MessageType::PbufMaintenance,
            Message::Echo(_) => MessageType::PbufEcho,
            Message::Another(_) => MessageType::PbufAnother,
        }
    }

    pub fn shape(&self) -> &'static MessageShape {
        self.message_type().shape()
    }
}

impl From<PbufEchoMessage> for Message {
    fn from(m: PbufEchoMessage) -> Self {
        Message::Echo(m)
    }
}

impl From<PbufAnotherMessage> for Message {
    fn from(m: PbufAnotherMessage) -> Self {
        Message::Another(m)
    }
}
