// Message shape descriptors
//
// One static descriptor per concrete message kind. Decoders pick a shape by
// tag and build an empty value through `instantiate`.

use std::fmt;

use super::messages::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    Required,
    Optional,
}

/// A field declared by a message schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub number: u32,
    pub kind: FieldKind,
    pub label: FieldLabel,
}

/// Binds a message to an extension field of its envelope message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionSpec {
    pub extendee: &'static str,
    pub name: &'static str,
    pub number: u32,
}

pub struct MessageShape {
    pub name: &'static str,
    /// Proto package; empty when the schema declares none.
    pub package: &'static str,
    /// Empty for framework messages whose layout is owned by funapi.
    pub fields: &'static [FieldSpec],
    pub extension: Option<ExtensionSpec>,
    new: fn() -> Message,
}

impl MessageShape {
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Builds an empty message of this shape.
    pub fn instantiate(&self) -> Message {
        (self.new)()
    }
}

// Compared by name only; constructor pointers carry no identity.
impl PartialEq for MessageShape {
    fn eq(&self, other: &Self) -> bool {
        self.package == other.package && self.name == other.name
    }
}

impl Eq for MessageShape {}

impl fmt::Debug for MessageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageShape")
            .field("name", &self.name)
            .field("package", &self.package)
            .field("fields", &self.fields)
            .field("extension", &self.extension)
            .finish()
    }
}

// pong_messages.proto declares no package.
const PONG_PACKAGE: &str = "";
const FUN_MESSAGE: &str = "FunMessage";

pub static FUN_MULTICAST_MESSAGE: MessageShape = MessageShape {
    name: "FunMulticastMessage",
    package: "funapi.service.multicast_message",
    fields: &[],
    extension: None,
    new: || Message::Multicast(FunMulticastMessage::default()),
};

pub static FUN_PING_MESSAGE: MessageShape = MessageShape {
    name: "FunPingMessage",
    package: "funapi.network.ping_message",
    fields: &[],
    extension: None,
    new: || Message::Ping(FunPingMessage::default()),
};

pub static MAINTENANCE_MESSAGE: MessageShape = MessageShape {
    name: "MaintenanceMessage",
    package: "funapi.management.maintenance_message",
    fields: &[],
    extension: None,
    new: || Message::Maintenance(MaintenanceMessage::default()),
};

pub static PBUF_ECHO_MESSAGE: MessageShape = MessageShape {
    name: "PbufEchoMessage",
    package: PONG_PACKAGE,
    fields: &[FieldSpec {
        name: "msg",
        number: 1,
        kind: FieldKind::String,
        label: FieldLabel::Required,
    }],
    extension: Some(ExtensionSpec {
        extendee: FUN_MESSAGE,
        name: "pbuf_echo",
        number: 16,
    }),
    new: || Message::Echo(PbufEchoMessage::default()),
};

pub static PBUF_ANOTHER_MESSAGE: MessageShape = MessageShape {
    name: "PbufAnotherMessage",
    package: PONG_PACKAGE,
    fields: &[FieldSpec {
        name: "msg",
        number: 1,
        kind: FieldKind::String,
        label: FieldLabel::Optional,
    }],
    extension: Some(ExtensionSpec {
        extendee: FUN_MESSAGE,
        name: "pbuf_another",
        number: 17,
    }),
    new: || Message::Another(PbufAnotherMessage::default()),
};
