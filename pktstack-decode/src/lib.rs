//! Zero-copy packet-stack decoding for pktstack
//!
//! This crate decodes a layered network packet (Ethernet, 802.1Q VLAN,
//! GRE, IPv4, UDP, SCTP) held in a single caller-owned byte buffer. It
//! never copies packet bytes, never allocates, and never trusts a
//! declared length without checking it against the bytes actually
//! present.
//!
//! # Architecture
//!
//! - [`cursor`] - bounds-checked read window over the buffer
//! - [`layer`] - the per-protocol decode contract ([`Layer`])
//! - [`ethernet`], [`vlan`], [`ipv4`], [`gre`], [`udp`], [`sctp`] - one
//!   module per protocol
//! - [`parser`] - the [`StackParser`] state machine and the header-only
//!   [`HeaderParser`]
//!
//! # Quick start
//!
//! ```rust
//! use pktstack_decode::{ProtocolId, StackParser};
//!
//! // A minimal UDP datagram inside IPv4 inside Ethernet
//! let frame: &[u8] = &[
//!     0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // dst MAC
//!     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // src MAC
//!     0x08, 0x00, // ethertype: IPv4
//!     0x45, 0x00, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x00, // IPv4 ...
//!     0x40, 0x11, 0x00, 0x00, 0xc0, 0xa8, 0x01, 0x01, // ... header
//!     0xc0, 0xa8, 0x01, 0x02,
//!     0x30, 0x39, 0x00, 0x35, 0x00, 0x08, 0x00, 0x00, // UDP header
//! ];
//!
//! let mut parser = StackParser::new(frame);
//! assert!(parser.parse(ProtocolId::Ethernet));
//! assert_eq!(parser.next(), ProtocolId::Ipv4);
//! assert_eq!(parser.next(), ProtocolId::Udp);
//! assert!(parser.payload().is_empty());
//! assert_eq!(parser.next(), ProtocolId::End);
//! ```

pub mod cursor;
pub mod ethernet;
pub mod gre;
pub mod ipv4;
pub mod layer;
pub mod parser;
pub mod sctp;
pub mod udp;
pub mod vlan;

// Re-export commonly used types
pub use cursor::Cursor;
pub use ethernet::Ethernet;
pub use gre::Gre;
pub use ipv4::Ipv4;
pub use layer::Layer;
pub use parser::{HeaderParser, StackParser};
pub use pktstack_core::{Outcome, ProtocolId};
pub use sctp::Sctp;
pub use udp::Udp;
pub use vlan::Vlan;
