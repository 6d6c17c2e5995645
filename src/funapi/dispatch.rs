// Tag resolution for incoming envelopes
//
// A dispatcher peeks the numeric tag before the body is validated. Unknown
// tags come back as errors for the caller to log or reject; nothing here
// panics on untrusted input.

use tracing::{debug, warn};

use super::message_types::{MessageType, MulticastMessageType};
use super::shapes::MessageShape;
use crate::error::MessageTableError;
use crate::fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub message_type: MessageType,
    pub name: &'static str,
    pub shape: &'static MessageShape,
}

pub fn resolve(tag: i32) -> Result<Resolved, MessageTableError> {
    match MessageType::try_from(tag) {
        Ok(message_type) => {
            let shape = message_type.shape();
            debug!(
                { fields::TAG } = tag,
                { fields::MESSAGE_TYPE } = message_type.name(),
                { fields::SHAPE } = shape.name,
                "Message type resolved"
            );
            Ok(Resolved {
                message_type,
                name: message_type.name(),
                shape,
            })
        }
        Err(e) => {
            warn!({ fields::TAG } = tag, "Unknown message type received");
            Err(e)
        }
    }
}

pub fn resolve_multicast(tag: i32) -> Result<MulticastMessageType, MessageTableError> {
    match MulticastMessageType::try_from(tag) {
        Ok(multicast_type) => {
            debug!(
                { fields::TAG } = tag,
                { fields::MULTICAST_MESSAGE_TYPE } = multicast_type.name(),
                "Multicast message type resolved"
            );
            Ok(multicast_type)
        }
        Err(e) => {
            warn!({ fields::TAG } = tag, "Unknown multicast message type received");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funapi::shapes;

    #[test]
    fn test_resolve_known_tag() {
        let resolved = resolve(16).unwrap();
        assert_eq!(resolved.message_type, MessageType::PbufEcho);
        assert_eq!(resolved.name, "pbuf_echo");
        assert_eq!(resolved.shape, &shapes::PBUF_ECHO_MESSAGE);
    }

    #[test]
    fn test_resolve_every_declared_tag() {
        for msg_type in MessageType::ALL {
            let resolved = resolve(msg_type.tag()).unwrap();
            assert_eq!(resolved.message_type, msg_type);
            assert_eq!(resolved.shape.instantiate().message_type(), msg_type);
        }
    }

    #[test]
    fn test_resolve_unknown_tag() {
        assert_eq!(
            resolve(255).unwrap_err(),
            MessageTableError::UnknownMessageType(255)
        );
        assert_eq!(
            resolve(-1).unwrap_err(),
            MessageTableError::UnknownMessageType(-1)
        );
    }

    #[test]
    fn test_resolve_multicast() {
        assert_eq!(resolve_multicast(8).unwrap(), MulticastMessageType::Chat);
        assert_eq!(
            resolve_multicast(17).unwrap_err(),
            MessageTableError::UnknownMulticastMessageType(17)
        );
    }
}
