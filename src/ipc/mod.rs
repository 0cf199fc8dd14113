//! Messaging between the display and the companion process.
//!
//! The two processes exchange newline-delimited JSON over the companion's
//! stdin (requests) and stdout (feed messages). `ingress` turns decoded
//! feed messages into scoreboard intents; `link` owns the child process on
//! the display side.

pub mod codec;
pub mod ingress;
pub mod link;
pub mod types;

pub use codec::{decode_line, encode_line};
pub use ingress::{apply, intents_for};
pub use link::CompanionLink;
pub use types::{CompanionMessage, CompanionRequest, ProtocolError};
