//! pktstack Core Library
//!
//! This crate provides the shared types and error handling for the
//! pktstack packet-stack decoder.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{ethertypes, ip_protocols, Outcome, ProtocolId};
