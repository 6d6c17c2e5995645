use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageTableError {
    #[error("unknown message type: {0}")]
    UnknownMessageType(i32),
    #[error("unknown multicast message type: {0}")]
    UnknownMulticastMessageType(i32),
    #[error("unknown message type name: {0:?}")]
    UnknownName(String),
}
