pub mod dispatch;
pub mod message_types;
pub mod messages;
pub mod shapes;
