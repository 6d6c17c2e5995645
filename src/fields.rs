// Structured logging field definitions
// This module centralizes all field names used in tracing logs

// Message fields
pub const MESSAGE_TYPE: &str = "message_type";
pub const MULTICAST_MESSAGE_TYPE: &str = "multicast_message_type";
pub const TAG: &str = "tag";
pub const SHAPE: &str = "shape";

// Operation fields
pub const COMMAND: &str = "command";
pub const ERROR: &str = "error";

// Configuration fields
pub const CONFIG_SOURCE: &str = "config_source";
